//! Error types for the prediction pipeline.

use stayprice_artifacts::ArtifactError;
use stayprice_encoder::EncodeError;
use stayprice_model::ModelError;
use thiserror::Error;

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Errors that can occur between loading artifacts and producing a price.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Artifact loading failed
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Request could not be encoded
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Model rejected the row or failed to evaluate
    #[error("Prediction failed: {0}")]
    Model(#[from] ModelError),

    /// Model and feature schema disagree on the row width
    #[error("Schema mismatch: feature schema has {schema} columns, model expects {model}")]
    SchemaMismatch {
        /// Columns in the feature schema
        schema: usize,
        /// Features the model was trained on
        model: usize,
    },
}

impl PredictError {
    /// True for errors caused by the request itself.
    ///
    /// These abort only the current prediction; the user can correct the
    /// input and try again. Everything else means the artifacts are unusable.
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Encode(EncodeError::UnknownCategory(_) | EncodeError::InvalidInput { .. })
        )
    }
}
