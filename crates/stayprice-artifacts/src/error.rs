//! Error types for artifact loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Errors that can occur while loading or validating training artifacts.
///
/// Every variant is fatal at startup: there is no degraded mode without a
/// complete artifact set.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        /// Path of the artifact file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected shape
    #[error("Failed to decode artifact {path}: {source}")]
    Decode {
        /// Path of the artifact file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Feature schema has no columns
    #[error("Feature schema is empty")]
    EmptySchema,

    /// Feature schema names the same column twice
    #[error("Duplicate column in feature schema: {0}")]
    DuplicateColumn(String),

    /// Vocabulary lists the same label twice
    #[error("Duplicate label {label:?} in vocabulary for {field}")]
    DuplicateLabel {
        /// Categorical field the vocabulary belongs to
        field: String,
        /// Repeated label
        label: String,
    },

    /// Vocabulary has no labels
    #[error("Vocabulary for {0} is empty")]
    EmptyVocabulary(String),

    /// Vocabulary for a required categorical field is missing
    #[error("No vocabulary for categorical field: {0}")]
    MissingVocabulary(String),

    /// Model artifact is structurally invalid
    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),
}
