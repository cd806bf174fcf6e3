//! Pose Embedding Library
//!
//! 3-D spectral embedding of rotation sets for visualization and clustering,
//! e.g. inspecting the distribution of particle poses recovered during
//! single-particle reconstruction.
//!
//! The pipeline is classical multidimensional scaling specialized to the
//! quaternion double cover:
//!
//! 1. Pairwise geodesic rotation distances, corrected for the q / −q
//!    ambiguity and folded into `[0, π/2]` ([`distance`]).
//! 2. Torgerson double-centering of the squared distances into a Gram
//!    matrix ([`gram`]).
//! 3. Top-3 symmetric eigendecomposition, each eigenvector scaled by the
//!    square root of its eigenvalue ([`spectral`]).
//!
//! # Quick Start
//!
//! ```
//! use pose_embedding::{compute_pose_embedding, EmbeddingConfig, Quaternion};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let poses = vec![
//!     Quaternion::identity(),
//!     Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2),
//!     Quaternion::from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2),
//!     Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2),
//! ];
//!
//! let embedding = compute_pose_embedding(&poses, &EmbeddingConfig::default())?;
//!
//! // One 3-D coordinate per input pose, in input order.
//! assert_eq!(embedding.len(), 4);
//! # Ok::<(), pose_embedding::EmbeddingError>(())
//! ```
//!
//! # Failure Modes
//!
//! Distances that are not realizable in 3-D Euclidean space surface as
//! [`EmbeddingError::DegenerateEmbedding`] rather than NaN coordinates. The
//! clamp in the distance kernel structurally prevents NaN from dot products
//! that exceed 1 in magnitude by rounding.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` on [`PoseEmbedding`].

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod distance;
pub mod embedding;
pub mod error;
pub mod gram;
pub mod quaternion;
pub mod sample;
pub mod spectral;
pub mod validation;

// Re-exports for convenient access
pub use config::{EmbeddingConfig, DEFAULT_EPSILON};
pub use distance::{distance_matrix, MIN_POSES};
pub use embedding::PoseEmbedding;
pub use error::{EmbeddingError, Result};
pub use gram::{gram_matrix, pose_gram};
pub use quaternion::{geodesic_from_dot, Quaternion};
pub use sample::{subsample, SampleMode};
pub use spectral::{compute_pose_embedding, embed_gram};
pub use validation::{check_row_alignment, validate_poses};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Embedding dimension.
pub const EMBED_DIM: usize = 3;
