//! Generic anticlustering implementations.

mod helpers;

pub mod distance;
pub mod exchange;
pub mod partition;

pub use distance::{distance_anticlustering_impl, diversity_objective_impl};
pub use exchange::{exchange_anticlustering_impl, variance_objective_impl};
