//! Error handling logic

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Failures raised at the stage boundary where they would otherwise
/// produce a silently wrong classification.
///
/// An empty post-selection is not an error; it is reported as
/// [`Prediction::Undecidable`](crate::Prediction::Undecidable).
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum ClassifierError {
    /// An input feature vector or raw record violates its invariants
    /// (unit norm, finite values, one reference per label).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// InvalidInput failure message
        message: String,
    },

    /// The amplitude vector carries no probability mass to sample from.
    #[error("Degenerate sampling: {message}")]
    DegenerateSampling {
        /// DegenerateSampling failure message
        message: String,
    },

    /// A configuration value is out of range (e.g. zero shots).
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// A vector or bit index does not fit the fixed 4-bit register.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Required dimension or bound.
        expected: usize,
        /// Dimension or index actually supplied.
        found: usize,
    },
}
