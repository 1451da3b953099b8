//! Model errors

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building or evaluating a model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Input row width differs from the trained feature count
    #[error("Feature count mismatch: model expects {expected}, got {actual}")]
    FeatureCountMismatch {
        /// Features the model was trained on
        expected: usize,
        /// Features supplied
        actual: usize,
    },

    /// Model produced NaN or infinity
    #[error("Model produced a non-finite prediction: {0}")]
    NonFinitePrediction(f64),

    /// Model parameters are structurally invalid
    #[error("Invalid model: {0}")]
    Invalid(String),
}
