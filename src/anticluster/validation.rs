//! Validation helpers for the anticlustering algorithms.

use numr::dtype::DType;
use numr::error::{Error, Result};

/// Validate data dtype (must be F32 or F64).
pub fn validate_anticluster_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate that data is 2D [n, m].
pub fn validate_data_2d(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires 2D data [n, m], got {}-D", shape.len()),
        });
    }
    if shape[0] == 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires at least 1 element"),
        });
    }
    Ok(())
}

/// Validate that a distance matrix is square [n, n].
pub fn validate_square(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.len() != 2 || shape[0] != shape[1] {
        return Err(Error::InvalidArgument {
            arg: "distances",
            reason: format!("{op} requires a square distance matrix [n, n], got {shape:?}"),
        });
    }
    if shape[0] == 0 {
        return Err(Error::InvalidArgument {
            arg: "distances",
            reason: format!("{op} requires at least 1 element"),
        });
    }
    Ok(())
}

/// Validate n_clusters parameter.
pub fn validate_n_clusters(n_clusters: usize, n_elements: usize, op: &'static str) -> Result<()> {
    if n_clusters == 0 {
        return Err(Error::InvalidArgument {
            arg: "n_clusters",
            reason: format!("{op} requires n_clusters > 0"),
        });
    }
    if n_clusters > n_elements {
        return Err(Error::InvalidArgument {
            arg: "n_clusters",
            reason: format!(
                "{op}: n_clusters={n_clusters} exceeds number of elements {n_elements}"
            ),
        });
    }
    Ok(())
}

/// Validate an index vector (cluster or category labels): 1D I64 of length n.
pub fn validate_index_vector(
    shape: &[usize],
    dtype: DType,
    n: usize,
    arg: &'static str,
    op: &'static str,
) -> Result<()> {
    if shape.len() != 1 {
        return Err(Error::InvalidArgument {
            arg,
            reason: format!("{op} requires 1D {arg}, got {}-D", shape.len()),
        });
    }
    if shape[0] != n {
        return Err(Error::InvalidArgument {
            arg,
            reason: format!("{op} requires {arg} of length {n}, got {}", shape[0]),
        });
    }
    if dtype != DType::I64 {
        return Err(Error::InvalidArgument {
            arg,
            reason: format!("{op} requires I64 {arg}, got {dtype:?}"),
        });
    }
    Ok(())
}
