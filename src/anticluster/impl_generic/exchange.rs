//! Generic exchange-method implementation for the variance objective.
//!
//! Maintains a K×M centroid matrix and a K-vector of per-cluster variance
//! contributions incrementally across tentative swaps: a candidate swap
//! shifts the two affected centroids by the scaled feature difference, the
//! two affected cluster variances are recomputed from their members, and
//! every other cluster's contribution is unchanged by construction.

use crate::anticluster::impl_generic::helpers::{
    build_result, read_assignment, read_labels, read_partner_index, scalar_tensor,
};
use crate::anticluster::impl_generic::partition::ClusterAssignment;
use crate::anticluster::traits::exchange::{ExchangeOptions, ExchangeResult};
use crate::anticluster::validation::{
    validate_anticluster_dtype, validate_data_2d, validate_n_clusters,
};
use numr::dtype::DType;
use numr::error::Result;
use numr::ops::TypeConversionOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Row-major feature storage, one row of `n_features` values per element.
struct PointStore {
    values: Vec<f64>,
    n_features: usize,
}

impl PointStore {
    fn new(values: Vec<f64>, n_features: usize) -> Self {
        Self { values, n_features }
    }

    #[inline]
    fn row(&self, e: usize) -> &[f64] {
        &self.values[e * self.n_features..(e + 1) * self.n_features]
    }
}

#[inline]
fn squared_euclidean(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}

/// Mean feature vector of one cluster, written into `center`.
fn compute_center(points: &PointStore, members: &[usize], center: &mut [f64]) {
    center.fill(0.0);
    for &e in members {
        for (c, v) in center.iter_mut().zip(points.row(e)) {
            *c += v;
        }
    }
    if !members.is_empty() {
        let freq = members.len() as f64;
        for c in center.iter_mut() {
            *c /= freq;
        }
    }
}

/// Sum of squared Euclidean distances from the members to `center`.
fn cluster_variance(points: &PointStore, members: &[usize], center: &[f64]) -> f64 {
    members
        .iter()
        .map(|&e| squared_euclidean(points.row(e), center))
        .sum()
}

/// Shift the centroids of clusters `a` and `b` for a tentative swap of
/// element `i` (in `a`) with element `j` (in `b`). Cluster sizes are
/// conserved by the swap, so each centroid moves by the scaled feature
/// difference.
fn update_centers(
    centers: &mut [f64],
    m: usize,
    points: &PointStore,
    (i, a): (usize, usize),
    (j, b): (usize, usize),
    frequencies: &[usize],
) {
    let fi = points.row(i);
    let fj = points.row(j);
    let freq_a = frequencies[a] as f64;
    let freq_b = frequencies[b] as f64;
    for d in 0..m {
        let delta = fj[d] - fi[d];
        centers[a * m + d] += delta / freq_a;
        centers[b * m + d] -= delta / freq_b;
    }
}

fn centers_of(assignment: &ClusterAssignment, points: &PointStore, k: usize, m: usize) -> Vec<f64> {
    let mut centers = vec![0.0; k * m];
    for c in 0..k {
        compute_center(
            points,
            assignment.members(c),
            &mut centers[c * m..(c + 1) * m],
        );
    }
    centers
}

fn objectives_of(
    assignment: &ClusterAssignment,
    points: &PointStore,
    centers: &[f64],
    k: usize,
    m: usize,
) -> Vec<f64> {
    (0..k)
        .map(|c| cluster_variance(points, assignment.members(c), &centers[c * m..(c + 1) * m]))
        .collect()
}

/// Generic exchange optimization of the variance objective.
pub fn exchange_anticlustering_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    options: &ExchangeOptions<R>,
) -> Result<ExchangeResult<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    validate_anticluster_dtype(data.dtype(), "exchange_anticlustering")?;
    validate_data_2d(data.shape(), "exchange_anticlustering")?;

    let n = data.shape()[0];
    let m = data.shape()[1];
    let k = options.n_clusters;
    let dtype = data.dtype();
    let device = data.device();

    validate_n_clusters(k, n, "exchange_anticlustering")?;
    let initial = read_assignment(&options.init, n, k, "exchange_anticlustering")?;
    let partners = read_partner_index(options.categories.as_ref(), n, "exchange_anticlustering")?;

    let values: Vec<f64> = client.cast(data, DType::F64)?.to_vec();
    let points = PointStore::new(values, m);

    let mut assignment = ClusterAssignment::new(initial, k);
    let frequencies = assignment.frequencies();

    let mut centers = centers_of(&assignment, &points, k, m);
    let mut objectives = objectives_of(&assignment, &points, &centers, k, m);
    let mut total: f64 = objectives.iter().sum();
    let mut n_exchanges = 0usize;

    let mut tmp_centers = vec![0.0; k * m];
    let mut tmp_objectives = vec![0.0; k];
    let mut best_centers = vec![0.0; k * m];
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

            tmp_centers.copy_from_slice(&centers);
            tmp_objectives.copy_from_slice(&objectives);

            update_centers(&mut tmp_centers, m, &points, (i, a), (j, b), &frequencies);
            assignment.swap(i, j);
            tmp_objectives[a] = cluster_variance(
                &points,
                assignment.members(a),
                &tmp_centers[a * m..(a + 1) * m],
            );
            tmp_objectives[b] = cluster_variance(
                &points,
                assignment.members(b),
                &tmp_centers[b * m..(b + 1) * m],
            );

            let tentative: f64 = tmp_objectives.iter().sum();
            if tentative > best_total {
                best_total = tentative;
                best_partner = Some(j);
                best_centers.copy_from_slice(&tmp_centers);
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
                centers.copy_from_slice(&best_centers);
                objectives.copy_from_slice(&best_objectives);
                n_exchanges += 1;
            }
        }
    }

    build_result(client, assignment, total, n_exchanges, dtype, device)
}

/// Variance objective of an arbitrary assignment, computed from scratch.
pub fn variance_objective_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    labels: &Tensor<R>,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    validate_anticluster_dtype(data.dtype(), "variance_objective")?;
    validate_data_2d(data.shape(), "variance_objective")?;

    let n = data.shape()[0];
    let m = data.shape()[1];
    let (assignment, k) = read_labels(labels, n, "variance_objective")?;

    let values: Vec<f64> = client.cast(data, DType::F64)?.to_vec();
    let points = PointStore::new(values, m);
    let assignment = ClusterAssignment::new(assignment, k);

    let centers = centers_of(&assignment, &points, k, m);
    let objective: f64 = objectives_of(&assignment, &points, &centers, k, m)
        .iter()
        .sum();

    scalar_tensor(client, objective, data.dtype(), data.device())
}
