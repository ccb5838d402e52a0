//! Generic exchange-method implementation for the diversity objective.
//!
//! Works from a precomputed symmetric distance matrix and maintains a
//! K-vector of per-cluster pairwise-distance sums. A tentative swap removes
//! the two elements' contributions from their clusters, performs the swap,
//! and adds the contributions on the other side; the element being added is
//! never yet a member at the moment its contribution is summed, so the
//! cross-pair is counted exactly once and self-distances are zero.

use crate::anticluster::impl_generic::helpers::{
    build_result, read_assignment, read_labels, read_partner_index, scalar_tensor,
};
use crate::anticluster::impl_generic::partition::ClusterAssignment;
use crate::anticluster::traits::exchange::{ExchangeOptions, ExchangeResult};
use crate::anticluster::validation::{
    validate_anticluster_dtype, validate_n_clusters, validate_square,
};
use numr::dtype::DType;
use numr::error::Result;
use numr::ops::TypeConversionOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Dense n×n distance matrix, row-major.
struct DistanceMatrix {
    values: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    fn new(values: Vec<f64>, n: usize) -> Self {
        Self { values, n }
    }

    #[inline]
    fn between(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}

/// Sum of pairwise distances among the members, each unordered pair counted
/// once.
fn cluster_diversity(distances: &DistanceMatrix, members: &[usize]) -> f64 {
    let mut sum = 0.0;
    for (p, &e) in members.iter().enumerate() {
        for &f in &members[p + 1..] {
            sum += distances.between(e, f);
        }
    }
    sum
}

/// Sum of distances from element `e` to every member of the cluster. `e`
/// itself may be among the members; its zero self-distance contributes
/// nothing.
fn distances_to_cluster(distances: &DistanceMatrix, members: &[usize], e: usize) -> f64 {
    members.iter().map(|&f| distances.between(e, f)).sum()
}

fn objectives_of(
    assignment: &ClusterAssignment,
    distances: &DistanceMatrix,
    k: usize,
) -> Vec<f64> {
    (0..k)
        .map(|c| cluster_diversity(distances, assignment.members(c)))
        .collect()
}

/// Generic exchange optimization of the diversity objective.
pub fn distance_anticlustering_impl<R, C>(
    client: &C,
    distances: &Tensor<R>,
    options: &ExchangeOptions<R>,
) -> Result<ExchangeResult<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    validate_anticluster_dtype(distances.dtype(), "distance_anticlustering")?;
    validate_square(distances.shape(), "distance_anticlustering")?;

    let n = distances.shape()[0];
    let k = options.n_clusters;
    let dtype = distances.dtype();
    let device = distances.device();

    validate_n_clusters(k, n, "distance_anticlustering")?;
    let initial = read_assignment(&options.init, n, k, "distance_anticlustering")?;
    let partners = read_partner_index(options.categories.as_ref(), n, "distance_anticlustering")?;

    let values: Vec<f64> = client.cast(distances, DType::F64)?.to_vec();
    let distances = DistanceMatrix::new(values, n);

    let mut assignment = ClusterAssignment::new(initial, k);

    let mut objectives = objectives_of(&assignment, &distances, k);
    let mut total: f64 = objectives.iter().sum();
    let mut n_exchanges = 0usize;

    let mut tmp_objectives = vec![0.0; k];
    let mut best_objectives = vec![0.0; k];

    // 1st level: visit every element in id order.
    for i in 0..n {
        let a = assignment.cluster_of(i);
        let mut best_total = 0.0;
        let mut best_partner = None;

        // 2nd level: score every admissible exchange partner.
        for &j in partners.partners_of(i) {
            let b = assignment.cluster_of(j);
            if a == b {
                continue;
            }

            tmp_objectives.copy_from_slice(&objectives);

            // Cluster a loses the pairs of element i, cluster b the pairs
            // of element j.
            tmp_objectives[a] -= distances_to_cluster(&distances, assignment.members(a), i);
            tmp_objectives[b] -= distances_to_cluster(&distances, assignment.members(b), j);
            assignment.swap(i, j);
            // After the swap, cluster a gains the pairs of element j and
            // cluster b the pairs of element i.
            tmp_objectives[a] += distances_to_cluster(&distances, assignment.members(a), j);
            tmp_objectives[b] += distances_to_cluster(&distances, assignment.members(b), i);

            let tentative: f64 = tmp_objectives.iter().sum();
            if tentative > best_total {
                best_total = tentative;
                best_partner = Some(j);
                best_objectives.copy_from_slice(&tmp_objectives);
            }

            // Undo to score the next candidate from the unchanged state.
            assignment.swap(i, j);
        }

        // Commit only a strict improvement over the running total.
        if let Some(j) = best_partner {
            if best_total > total {
                assignment.swap(i, j);
                total = best_total;
                objectives.copy_from_slice(&best_objectives);
                n_exchanges += 1;
            }
        }
    }

    build_result(client, assignment, total, n_exchanges, dtype, device)
}

/// Diversity objective of an arbitrary assignment, computed from scratch.
pub fn diversity_objective_impl<R, C>(
    client: &C,
    distances: &Tensor<R>,
    labels: &Tensor<R>,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    validate_anticluster_dtype(distances.dtype(), "diversity_objective")?;
    validate_square(distances.shape(), "diversity_objective")?;

    let n = distances.shape()[0];
    let (assignment, k) = read_labels(labels, n, "diversity_objective")?;

    let values: Vec<f64> = client.cast(distances, DType::F64)?.to_vec();
    let matrix = DistanceMatrix::new(values, n);
    let assignment = ClusterAssignment::new(assignment, k);

    let objective: f64 = objectives_of(&assignment, &matrix, k).iter().sum();

    scalar_tensor(client, objective, distances.dtype(), distances.device())
}
