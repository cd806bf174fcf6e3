//! Torgerson double-centering: squared distances to a Gram matrix.
//!
//! Classical multidimensional scaling converts a squared-distance matrix D²
//! into an inner-product (Gram) matrix via `G = −½·C·D²·C` with the
//! centering matrix `C = I − J/N`. The Gram matrix's top eigenvectors then
//! give a low-dimensional Euclidean embedding approximating the original
//! distances.

use nalgebra::DMatrix;

use crate::config::EmbeddingConfig;
use crate::distance::distance_matrix;
use crate::error::Result;
use crate::quaternion::Quaternion;

/// Double-center a symmetric distance matrix into a Gram matrix.
///
/// Equivalent to `−½·C·D²·C`, computed through row and grand means:
/// `g_ij = −½·(d²_ij − r_i − r_j + m)` where `r_i` is the mean of squared
/// row i and `m` the grand mean. The input must be symmetric; the output
/// then is too, with each row summing to ≈ 0.
#[must_use]
pub fn gram_matrix(distances: &DMatrix<f64>) -> DMatrix<f64> {
    let n = distances.nrows();
    let sq = distances.map(|v| v * v);

    let row_means: Vec<f64> = (0..n).map(|i| sq.row(i).sum() / n as f64).collect();
    let grand_mean = row_means.iter().sum::<f64>() / n as f64;

    DMatrix::from_fn(n, n, |i, j| {
        -0.5 * (sq[(i, j)] - row_means[i] - row_means[j] + grand_mean)
    })
}

/// Gram matrix for a pose set: geodesic distances, then double-centering.
///
/// # Errors
///
/// Returns [`crate::EmbeddingError::TooFewPoses`] for fewer than 2 poses.
pub fn pose_gram(poses: &[Quaternion], config: &EmbeddingConfig) -> Result<DMatrix<f64>> {
    let d = distance_matrix(poses, config)?;
    Ok(gram_matrix(&d))
}
