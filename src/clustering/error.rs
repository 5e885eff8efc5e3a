//! Error types for clustering operations.

use thiserror::Error;

/// Errors raised while validating input or running the engine.
///
/// All variants are caller-input errors raised synchronously before any
/// state mutation; none of them are transient, so no retry policy applies.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The dataset has zero rows.
    #[error("empty input: the dataset must contain at least one row")]
    EmptyInput,

    /// A row's length differs from the first row's length.
    #[error("dimension mismatch at row {row}: expected {expected}, actual {actual}")]
    DimensionMismatch {
        /// Index of the offending row
        row: usize,
        /// Dimension established by the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Fewer than two particles: no distinct partner exists for pairing.
    #[error("insufficient particles: at least 2 required, actual {actual}")]
    InsufficientParticles {
        /// Number of particles available
        actual: usize,
    },

    /// Invalid configuration value.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },
}

impl ClusterError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(row: usize, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            row,
            expected,
            actual,
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
