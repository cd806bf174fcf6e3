//! Configuration for pose embedding computation.
//!
//! This module provides the [`EmbeddingConfig`] struct which centralizes the
//! tunable numerical parameters of the distance and spectral stages.
//!
//! # Example
//!
//! ```
//! use pose_embedding::EmbeddingConfig;
//!
//! // Use default configuration
//! let config = EmbeddingConfig::default();
//!
//! // Tighten the distance offset
//! let config = EmbeddingConfig::default().with_epsilon(1e-8);
//! ```

use crate::error::{EmbeddingError, Result};

/// Default distance offset added to every pairwise distance.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default tolerance below which a non-positive eigenvalue is treated as zero.
pub const DEFAULT_EIGENVALUE_ZERO_TOL: f64 = 1e-9;

/// Configuration for pose embedding computation.
///
/// Both parameters are heuristics carried for compatibility rather than
/// derived invariants: `epsilon` keeps exact zeros out of the squared
/// distance matrix so double-centering stays well behaved, and
/// `eigenvalue_zero_tol` separates genuinely negative eigenvalues (a
/// degenerate, non-embeddable input) from eigensolver noise around zero.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    /// Offset added to every pairwise geodesic distance, diagonal included.
    /// Duplicate poses and self-distances therefore sit at `epsilon` rather
    /// than exactly 0.
    pub epsilon: f64,

    /// Eigenvalues in `[-eigenvalue_zero_tol, 0]` are snapped to zero before
    /// the square-root scaling; anything below that range is reported as a
    /// degenerate embedding.
    pub eigenvalue_zero_tol: f64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            eigenvalue_zero_tol: DEFAULT_EIGENVALUE_ZERO_TOL,
        }
    }
}

impl EmbeddingConfig {
    /// Replace the distance offset.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Replace the eigenvalue zero tolerance.
    #[must_use]
    pub const fn with_eigenvalue_zero_tol(mut self, tol: f64) -> Self {
        self.eigenvalue_zero_tol = tol;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingError::InvalidConfig`] if `epsilon` is not a
    /// strictly positive finite number, or if `eigenvalue_zero_tol` is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(EmbeddingError::invalid_config(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if !self.eigenvalue_zero_tol.is_finite() || self.eigenvalue_zero_tol < 0.0 {
            return Err(EmbeddingError::invalid_config(format!(
                "eigenvalue_zero_tol must be a non-negative finite number, got {}",
                self.eigenvalue_zero_tol
            )));
        }
        Ok(())
    }
}
