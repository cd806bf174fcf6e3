//! Error types for pose embedding operations.
//!
//! This module provides the error hierarchy for the distance, Gram and
//! spectral stages of the embedding pipeline.

use thiserror::Error;

/// Main error type for pose embedding operations.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Input validation errors.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pose set is too small for the requested stage.
    #[error("Too few poses: need at least {min}, got {actual}")]
    TooFewPoses { min: usize, actual: usize },

    /// Input tables disagree on row count.
    #[error("All tables must have the same number of rows: expected {expected}, offending table indices {offending:?}")]
    RowCountMismatch {
        expected: usize,
        offending: Vec<usize>,
    },

    /// A selected top-3 eigenvalue is negative, so the square-root scaling
    /// is undefined: the distances are not realizable in 3-D Euclidean space.
    #[error("Degenerate embedding: eigenvalue {eigenvalue} for component {component} is negative; distances are not Euclidean-embeddable in 3 dimensions")]
    DegenerateEmbedding { component: usize, eigenvalue: f64 },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for pose embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

impl EmbeddingError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a too-few-poses error.
    #[must_use]
    pub const fn too_few_poses(min: usize, actual: usize) -> Self {
        Self::TooFewPoses { min, actual }
    }

    /// Create a row count mismatch error.
    #[must_use]
    pub const fn row_count_mismatch(expected: usize, offending: Vec<usize>) -> Self {
        Self::RowCountMismatch {
            expected,
            offending,
        }
    }

    /// Create a degenerate embedding error.
    #[must_use]
    pub const fn degenerate(component: usize, eigenvalue: f64) -> Self {
        Self::DegenerateEmbedding {
            component,
            eigenvalue,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
