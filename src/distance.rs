//! Pairwise geodesic distance matrix over a pose set.
//!
//! Entry (i, j) is the folded geodesic distance between rotations i and j
//! (see [`crate::quaternion::geodesic_from_dot`]) plus the configured
//! epsilon offset. The offset applies to every entry, diagonal included, so
//! exact zeros never reach the squared-distance matrix downstream.

use nalgebra::DMatrix;

use crate::config::EmbeddingConfig;
use crate::error::{EmbeddingError, Result};
use crate::quaternion::Quaternion;

/// Minimum number of poses for a meaningful distance matrix.
pub const MIN_POSES: usize = 2;

/// Compute the N×N geodesic distance matrix for a pose set.
///
/// The matrix is symmetric with every entry in `[ε, π/2 + ε]`; the diagonal
/// sits at ε, not 0.
///
/// # Errors
///
/// Returns [`EmbeddingError::TooFewPoses`] for fewer than 2 poses.
pub fn distance_matrix(poses: &[Quaternion], config: &EmbeddingConfig) -> Result<DMatrix<f64>> {
    if poses.len() < MIN_POSES {
        return Err(EmbeddingError::too_few_poses(MIN_POSES, poses.len()));
    }

    let n = poses.len();
    let eps = config.epsilon;
    let mut d = DMatrix::<f64>::zeros(n, n);

    for i in 0..n {
        d[(i, i)] = eps;
        for j in (i + 1)..n {
            let dist = poses[i].geodesic_distance(&poses[j]) + eps;
            d[(i, j)] = dist;
            d[(j, i)] = dist;
        }
    }

    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn axis_set() -> Vec<Quaternion> {
        vec![
            Quaternion::identity(),
            Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2),
            Quaternion::from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2),
            Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2),
        ]
    }

    #[test]
    fn test_symmetry_and_diagonal() {
        let config = EmbeddingConfig::default();
        let d = distance_matrix(&axis_set(), &config).unwrap();

        for i in 0..4 {
            assert_relative_eq!(d[(i, i)], config.epsilon, epsilon = 1e-15);
            for j in 0..4 {
                assert_relative_eq!(d[(i, j)], d[(j, i)], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_entries_within_fold_range() {
        let config = EmbeddingConfig::default();
        let d = distance_matrix(&axis_set(), &config).unwrap();
        for v in d.iter() {
            assert!(*v >= config.epsilon);
            assert!(*v <= FRAC_PI_2 + config.epsilon + 1e-12);
        }
    }

    #[test]
    fn test_negated_pose_same_matrix() {
        let config = EmbeddingConfig::default();
        let mut poses = axis_set();
        let d0 = distance_matrix(&poses, &config).unwrap();
        poses[2] = -poses[2];
        let d1 = distance_matrix(&poses, &config).unwrap();
        assert_eq!(d0, d1);
    }

    #[test]
    fn test_too_few_poses() {
        let config = EmbeddingConfig::default();
        let err = distance_matrix(&[Quaternion::identity()], &config).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::TooFewPoses { min: 2, actual: 1 }
        ));
    }
}
