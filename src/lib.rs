//! anticlust - Anticlustering for Rust
//!
//! anticlust partitions a set of elements into groups of fixed sizes so that
//! the groups are maximally *heterogeneous* — the opposite of clustering.
//! Typical uses are assembling parallel test forms, splitting stimulus pools
//! into equivalent sets, and dividing participants into comparable groups.
//!
//! # Objectives
//!
//! - **Variance**: sum over clusters of squared Euclidean distances from
//!   each member to its cluster centroid, computed from a `[n, m]` feature
//!   matrix.
//! - **Diversity**: sum over clusters of pairwise distances among members,
//!   computed from a precomputed `[n, n]` distance matrix. Optional
//!   categorical constraints restrict exchanges to same-category partners,
//!   keeping the per-category distribution across clusters stable.
//!
//! Both objectives are maximized by the *exchange method*: a deterministic
//! single-pass local search that tests every element against every
//! admissible partner and commits the best strictly improving swap per
//! element. Cluster sizes are taken from the initial assignment and
//! conserved.
//!
//! # Example
//!
//! ```ignore
//! use anticlust::{AnticlusteringAlgorithms, ExchangeOptions};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let data = Tensor::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[6, 1], &device);
//! let init = Tensor::from_slice(&[0i64, 0, 0, 1, 1, 1], &[6], &device);
//!
//! let result = client.exchange_anticlustering(
//!     &data,
//!     &ExchangeOptions { n_clusters: 2, init, categories: None },
//! )?;
//! // result.labels: anticlustered assignment with the same cluster sizes
//! ```

pub mod anticluster;

// Re-export main types for convenience
pub use anticluster::{AnticlusteringAlgorithms, ExchangeOptions, ExchangeResult};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::error::{Error, Result};
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
