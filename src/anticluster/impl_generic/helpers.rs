//! Tensor/host conversions shared by the exchange variants.
//!
//! The exchange loop is inherently sequential (every tentative swap is
//! scored against state left by the committed swaps before it), so inputs
//! are transferred once and the search runs on the host.

use crate::anticluster::impl_generic::partition::{ClusterAssignment, PartnerIndex};
use crate::anticluster::traits::exchange::ExchangeResult;
use crate::anticluster::validation::validate_index_vector;
use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::ops::TypeConversionOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Read a cluster assignment tensor into element-to-cluster indices,
/// rejecting ids outside [0, n_clusters).
pub(crate) fn read_assignment<R: Runtime>(
    init: &Tensor<R>,
    n: usize,
    n_clusters: usize,
    op: &'static str,
) -> Result<Vec<usize>> {
    validate_index_vector(init.shape(), init.dtype(), n, "init", op)?;
    let raw: Vec<i64> = init.to_vec();
    let mut labels = Vec::with_capacity(n);
    for &c in &raw {
        if c < 0 || c as usize >= n_clusters {
            return Err(Error::InvalidArgument {
                arg: "init",
                reason: format!("{op}: cluster id {c} outside [0, {n_clusters})"),
            });
        }
        labels.push(c as usize);
    }
    Ok(labels)
}

/// Build the partner index from an optional category tensor. Without
/// categories every element is an admissible partner of every other.
pub(crate) fn read_partner_index<R: Runtime>(
    categories: Option<&Tensor<R>>,
    n: usize,
    op: &'static str,
) -> Result<PartnerIndex> {
    let Some(categories) = categories else {
        return Ok(PartnerIndex::unconstrained(n));
    };
    validate_index_vector(categories.shape(), categories.dtype(), n, "categories", op)?;
    let raw: Vec<i64> = categories.to_vec();
    let mut cats = Vec::with_capacity(n);
    let mut n_categories = 0usize;
    for &c in &raw {
        if c < 0 {
            return Err(Error::InvalidArgument {
                arg: "categories",
                reason: format!("{op}: negative category id {c}"),
            });
        }
        let c = c as usize;
        n_categories = n_categories.max(c + 1);
        cats.push(c);
    }
    Ok(PartnerIndex::from_categories(cats, n_categories))
}

/// Read an assignment for the objective oracles, deriving the number of
/// clusters as `max(labels) + 1`.
pub(crate) fn read_labels<R: Runtime>(
    labels: &Tensor<R>,
    n: usize,
    op: &'static str,
) -> Result<(Vec<usize>, usize)> {
    validate_index_vector(labels.shape(), labels.dtype(), n, "labels", op)?;
    let raw: Vec<i64> = labels.to_vec();
    let mut out = Vec::with_capacity(n);
    let mut n_clusters = 1usize;
    for &c in &raw {
        if c < 0 {
            return Err(Error::InvalidArgument {
                arg: "labels",
                reason: format!("{op}: negative cluster id {c}"),
            });
        }
        let c = c as usize;
        n_clusters = n_clusters.max(c + 1);
        out.push(c);
    }
    Ok((out, n_clusters))
}

/// Wrap a host-side objective value as a scalar tensor in the input dtype.
pub(crate) fn scalar_tensor<R, C>(
    client: &C,
    value: f64,
    dtype: DType,
    device: &R::Device,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    let scalar = Tensor::<R>::from_slice(&[value], &[], device);
    client.cast(&scalar, dtype)
}

/// Assemble the optimizer result: labels tensor, scalar objective, commit
/// count.
pub(crate) fn build_result<R, C>(
    client: &C,
    assignment: ClusterAssignment,
    objective: f64,
    n_exchanges: usize,
    dtype: DType,
    device: &R::Device,
) -> Result<ExchangeResult<R>>
where
    R: Runtime,
    C: TypeConversionOps<R> + RuntimeClient<R>,
{
    let labels: Vec<i64> = assignment.into_labels().into_iter().map(|c| c as i64).collect();
    let n = labels.len();
    Ok(ExchangeResult {
        labels: Tensor::<R>::from_slice(&labels, &[n], device),
        objective: scalar_tensor(client, objective, dtype, device)?,
        n_exchanges,
    })
}
