//! Trait definitions for anticlustering algorithms.

pub mod exchange;
