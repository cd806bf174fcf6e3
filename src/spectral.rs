//! Spectral extraction of the 3-D embedding from a Gram matrix.
//!
//! The top three eigenvectors of the double-centered Gram matrix, each
//! scaled by the square root of its eigenvalue, give the classical-MDS
//! coordinates. A negative eigenvalue among the selected three means the
//! distances are not realizable in 3-D Euclidean space and is reported as
//! [`EmbeddingError::DegenerateEmbedding`].

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::debug;

use crate::config::EmbeddingConfig;
use crate::embedding::PoseEmbedding;
use crate::error::{EmbeddingError, Result};
use crate::gram::pose_gram;
use crate::quaternion::Quaternion;
use crate::validation::validate_poses;
use crate::EMBED_DIM;

/// Extract the 3-D embedding from a symmetric Gram matrix.
///
/// Eigenvalues within `config.eigenvalue_zero_tol` below zero are snapped
/// to zero (eigensolver noise on rank-deficient input, e.g. a pose set with
/// fewer than three distinct rotations); the corresponding coordinate
/// column is then identically zero.
///
/// # Errors
///
/// - [`EmbeddingError::TooFewPoses`] if the matrix has fewer than 3 rows
///   (three eigenpairs are required).
/// - [`EmbeddingError::DegenerateEmbedding`] if a selected eigenvalue is
///   negative beyond the tolerance.
pub fn embed_gram(gram: &DMatrix<f64>, config: &EmbeddingConfig) -> Result<PoseEmbedding> {
    let n = gram.nrows();
    if n < EMBED_DIM {
        return Err(EmbeddingError::too_few_poses(EMBED_DIM, n));
    }

    let eigen = SymmetricEigen::new(gram.clone());

    // nalgebra does not order the eigenvalues; sort the pairs descending.
    let mut pairs: Vec<(f64, DVector<f64>)> = eigen
        .eigenvalues
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, eigen.eigenvectors.column(i).into_owned()))
        .collect();
    pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut eigenvalues = [0.0f64; EMBED_DIM];
    let mut scales = [0.0f64; EMBED_DIM];
    for (k, (value, _)) in pairs.iter().take(EMBED_DIM).enumerate() {
        let value = if *value < 0.0 && *value >= -config.eigenvalue_zero_tol {
            0.0
        } else {
            *value
        };
        if value < 0.0 {
            return Err(EmbeddingError::degenerate(k, value));
        }
        eigenvalues[k] = value;
        scales[k] = value.sqrt();
    }

    let coordinates: Vec<[f64; EMBED_DIM]> = (0..n)
        .map(|i| {
            [
                pairs[0].1[i] * scales[0],
                pairs[1].1[i] * scales[1],
                pairs[2].1[i] * scales[2],
            ]
        })
        .collect();

    Ok(PoseEmbedding::new(coordinates, eigenvalues))
}

/// Compute the 3-D embedding of a pose set.
///
/// Pipeline entry point: validates the poses and configuration, builds the
/// folded geodesic distance matrix, double-centers it, and extracts the
/// spectral embedding.
///
/// # Errors
///
/// - [`EmbeddingError::InvalidConfig`] for an invalid configuration.
/// - [`EmbeddingError::InvalidInput`] for non-finite pose components.
/// - [`EmbeddingError::TooFewPoses`] for fewer than 3 poses.
/// - [`EmbeddingError::DegenerateEmbedding`] if the distances are not
///   realizable in 3-D Euclidean space.
///
/// # Example
///
/// ```
/// use pose_embedding::{compute_pose_embedding, EmbeddingConfig, Quaternion};
/// use std::f64::consts::FRAC_PI_2;
///
/// let poses = vec![
///     Quaternion::identity(),
///     Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2),
///     Quaternion::from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2),
///     Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2),
/// ];
///
/// let embedding = compute_pose_embedding(&poses, &EmbeddingConfig::default())?;
/// assert_eq!(embedding.len(), 4);
/// # Ok::<(), pose_embedding::EmbeddingError>(())
/// ```
pub fn compute_pose_embedding(
    poses: &[Quaternion],
    config: &EmbeddingConfig,
) -> Result<PoseEmbedding> {
    config.validate()?;
    validate_poses(poses)?;

    debug!(n = poses.len(), epsilon = config.epsilon, "embedding pose set");

    let gram = pose_gram(poses, config)?;
    let embedding = embed_gram(&gram, config)?;

    debug!(
        eigenvalues = ?embedding.eigenvalues(),
        "spectral embedding complete"
    );

    Ok(embedding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_positive_definite_gram_embeds() {
        let gram = DMatrix::from_diagonal(&DVector::from_vec(vec![5.0, 3.0, 2.0, 1.0]));
        let e = embed_gram(&gram, &EmbeddingConfig::default()).unwrap();
        assert_eq!(e.len(), 4);
        let ev = e.eigenvalues();
        assert_abs_diff_eq!(ev[0], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ev[1], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ev[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_top_eigenvalue_is_degenerate() {
        let gram = DMatrix::from_diagonal(&DVector::from_vec(vec![5.0, 3.0, -2.0, -4.0]));
        let err = embed_gram(&gram, &EmbeddingConfig::default()).unwrap_err();
        match err {
            EmbeddingError::DegenerateEmbedding {
                component,
                eigenvalue,
            } => {
                assert_eq!(component, 2);
                assert_abs_diff_eq!(eigenvalue, -2.0, epsilon = 1e-12);
            }
            other => panic!("expected DegenerateEmbedding, got {other:?}"),
        }
    }

    #[test]
    fn test_near_zero_eigenvalue_snaps_to_zero() {
        // Within tolerance of zero: treated as a rank deficiency, not an error.
        let gram = DMatrix::from_diagonal(&DVector::from_vec(vec![5.0, 3.0, -1e-12]));
        let e = embed_gram(&gram, &EmbeddingConfig::default()).unwrap();
        assert_eq!(e.eigenvalues()[2], 0.0);
        for p in e.points() {
            assert_eq!(p[2], 0.0);
        }
    }

    #[test]
    fn test_requires_three_eigenpairs() {
        let gram = DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 1.0]));
        let err = embed_gram(&gram, &EmbeddingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::TooFewPoses { min: 3, actual: 2 }
        ));
    }

    #[test]
    fn test_scaling_by_sqrt_eigenvalue() {
        // Diagonal Gram: eigenvectors are the standard basis, so each point
        // lands at sqrt(λ) along its own component (up to sign).
        let gram = DMatrix::from_diagonal(&DVector::from_vec(vec![9.0, 4.0, 1.0, 0.0]));
        let e = embed_gram(&gram, &EmbeddingConfig::default()).unwrap();
        assert_abs_diff_eq!(e.point(0)[0].abs(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.point(1)[1].abs(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.point(2)[2].abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.point(3)[0], 0.0, epsilon = 1e-12);
    }
}
