//! Error types for feature encoding.

use stayprice_artifacts::UnknownCategory;
use thiserror::Error;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while assembling a feature row.
///
/// All of these abort only the request being encoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Label is not in the field's training vocabulary
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// Numeric input outside its domain
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Input field that was rejected
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Column the encoder writes is not in the model schema
    #[error("Feature schema is missing column(s): {}", .0.join(", "))]
    SchemaMismatch(Vec<String>),
}

impl EncodeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
