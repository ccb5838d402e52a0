//! Anticlustering by the exchange method.
//!
//! Partitions n elements into k clusters of fixed sizes so that the clusters
//! are maximally heterogeneous, with a variance objective (squared Euclidean
//! distances to cluster centroids) and a diversity objective (pairwise
//! distances within clusters, from a precomputed distance matrix). Optional
//! categorical exchange constraints keep the per-category distribution
//! across clusters stable.

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

pub use traits::exchange::{AnticlusteringAlgorithms, ExchangeOptions, ExchangeResult};
pub use validation::*;
