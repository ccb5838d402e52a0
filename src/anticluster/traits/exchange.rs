//! Anticlustering exchange method trait.

use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Options for the exchange method.
#[derive(Debug, Clone)]
pub struct ExchangeOptions<R: Runtime> {
    /// Number of clusters.
    pub n_clusters: usize,
    /// Initial cluster assignment [n] I64, values in [0, n_clusters).
    /// Cluster sizes are taken from this assignment and conserved by the
    /// optimizer.
    pub init: Tensor<R>,
    /// Optional category labels [n] I64. When present, only elements of the
    /// same category are admissible exchange partners, so the per-category
    /// distribution across clusters is conserved.
    pub categories: Option<Tensor<R>>,
}

/// Result of one exchange optimization pass.
#[derive(Debug, Clone)]
pub struct ExchangeResult<R: Runtime> {
    /// Optimized cluster assignment [n] I64.
    pub labels: Tensor<R>,
    /// Objective value of `labels` (scalar).
    pub objective: Tensor<R>,
    /// Number of committed exchanges during the pass.
    pub n_exchanges: usize,
}

/// Anticlustering algorithms: partition n elements into clusters of fixed
/// sizes so that a heterogeneity objective across the partition is
/// maximized.
///
/// The exchange method is a deterministic single-pass local search: every
/// element is tested against every admissible partner, and the best strictly
/// improving swap per element is committed. Callers seeking further
/// improvement invoke the method again with the previous output as the new
/// initial assignment.
pub trait AnticlusteringAlgorithms<R: Runtime> {
    /// Maximize the variance objective (sum over clusters of squared
    /// Euclidean distances from each member to its cluster centroid) for
    /// data [n, m].
    fn exchange_anticlustering(
        &self,
        data: &Tensor<R>,
        options: &ExchangeOptions<R>,
    ) -> Result<ExchangeResult<R>>;

    /// Maximize the diversity objective (sum over clusters of pairwise
    /// distances among members) for a symmetric distance matrix [n, n] with
    /// zero diagonal.
    fn distance_anticlustering(
        &self,
        distances: &Tensor<R>,
        options: &ExchangeOptions<R>,
    ) -> Result<ExchangeResult<R>>;

    /// Variance objective of an assignment (scalar).
    fn variance_objective(&self, data: &Tensor<R>, labels: &Tensor<R>) -> Result<Tensor<R>>;

    /// Diversity objective of an assignment (scalar).
    fn diversity_objective(
        &self,
        distances: &Tensor<R>,
        labels: &Tensor<R>,
    ) -> Result<Tensor<R>>;
}
