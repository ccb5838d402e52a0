//! CPU implementations of the anticlustering algorithms.

mod exchange;
