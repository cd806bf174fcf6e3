//! Input validation for pose sets and their source tables.
//!
//! The embedding core assumes a single aligned pose array; the helpers here
//! cover the checks a loader performs before handing one over (row counts
//! agreeing across tables) plus the finiteness check the core itself runs.

use tracing::warn;

use crate::error::{EmbeddingError, Result};
use crate::quaternion::Quaternion;

/// Norm deviation from 1 beyond which a pose draws a warning.
const UNIT_NORM_WARN_TOL: f64 = 1e-3;

/// Validate a pose set prior to embedding.
///
/// Rejects non-finite components. Unit norm is advisory only: a pose whose
/// norm deviates from 1 by more than `1e-3` is logged as a warning but
/// accepted, since normalization is the caller's responsibility.
///
/// # Errors
///
/// Returns [`EmbeddingError::InvalidInput`] if any component is NaN or
/// infinite.
pub fn validate_poses(poses: &[Quaternion]) -> Result<()> {
    for (i, q) in poses.iter().enumerate() {
        if !q.is_finite() {
            return Err(EmbeddingError::invalid_input(format!(
                "pose {i} has a non-finite component: {q:?}"
            )));
        }
        let norm = q.norm();
        if (norm - 1.0).abs() > UNIT_NORM_WARN_TOL {
            warn!(pose = i, norm, "pose is not unit-norm");
        }
    }
    Ok(())
}

/// Check that all input tables carry the same number of rows.
///
/// Returns the common row count. Table 0 sets the expectation, matching the
/// loader convention of treating the first input as the reference.
///
/// # Errors
///
/// Returns [`EmbeddingError::RowCountMismatch`] naming the indices of the
/// disagreeing tables, or [`EmbeddingError::InvalidInput`] if no tables
/// were given.
pub fn check_row_alignment(row_counts: &[usize]) -> Result<usize> {
    let Some(&expected) = row_counts.first() else {
        return Err(EmbeddingError::invalid_input("no input tables"));
    };

    let offending: Vec<usize> = row_counts
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, &count)| count != expected)
        .map(|(i, _)| i)
        .collect();

    if offending.is_empty() {
        Ok(expected)
    } else {
        Err(EmbeddingError::row_count_mismatch(expected, offending))
    }
}
