//! Pose embedding result type.

use nalgebra::DMatrix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EMBED_DIM;

/// 3-D spectral embedding of a pose set.
///
/// Row i is the coordinate for input pose i, in input order; column k is the
/// eigenvector of the k-th largest Gram eigenvalue scaled by `sqrt(λ_k)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseEmbedding {
    /// One 3-D coordinate per input pose.
    coordinates: Vec<[f64; EMBED_DIM]>,

    /// The three largest Gram eigenvalues, descending.
    eigenvalues: [f64; EMBED_DIM],
}

impl PoseEmbedding {
    /// Assemble an embedding from coordinates and their eigenvalues.
    #[must_use]
    pub const fn new(coordinates: Vec<[f64; EMBED_DIM]>, eigenvalues: [f64; EMBED_DIM]) -> Self {
        Self {
            coordinates,
            eigenvalues,
        }
    }

    /// Number of embedded poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the embedding is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate of pose `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn point(&self, i: usize) -> [f64; EMBED_DIM] {
        self.coordinates[i]
    }

    /// All coordinates, in input order.
    #[must_use]
    pub fn points(&self) -> &[[f64; EMBED_DIM]] {
        &self.coordinates
    }

    /// The three largest Gram eigenvalues, descending.
    #[must_use]
    pub const fn eigenvalues(&self) -> [f64; EMBED_DIM] {
        self.eigenvalues
    }

    /// Coordinates as an N×3 matrix (row per pose).
    #[must_use]
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.coordinates.len(), EMBED_DIM, |i, k| {
            self.coordinates[i][k]
        })
    }

    /// Pairwise Euclidean distances between embedded points.
    ///
    /// Diagnostic helper: for well-formed rotational-distance data these
    /// approximate the folded geodesic distances of the input poses.
    #[must_use]
    pub fn pairwise_distances(&self) -> DMatrix<f64> {
        let n = self.coordinates.len();
        let mut d = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let a = self.coordinates[i];
                let b = self.coordinates[j];
                let dist = ((a[0] - b[0]).powi(2)
                    + (a[1] - b[1]).powi(2)
                    + (a[2] - b[2]).powi(2))
                .sqrt();
                d[(i, j)] = dist;
                d[(j, i)] = dist;
            }
        }
        d
    }
}
