//! Artifact file locations and JSON loading.

use crate::error::{ArtifactError, Result};
use crate::schema::FeatureSchema;
use crate::vocabulary::VocabularySet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file name of the serialized regression model.
pub const MODEL_FILE: &str = "regression_model.json";

/// Default file name of the ordered feature list.
pub const FEATURES_FILE: &str = "features.json";

/// Default file name of the label encoder vocabularies.
pub const ENCODERS_FILE: &str = "label_encoders.json";

/// Locations of the three training artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Serialized regression model
    pub model: PathBuf,
    /// Ordered feature names
    pub features: PathBuf,
    /// Label encoder vocabularies keyed by field
    pub encoders: PathBuf,
}

impl ArtifactPaths {
    /// Artifacts stored under their default names in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            features: dir.join(FEATURES_FILE),
            encoders: dir.join(ENCODERS_FILE),
        }
    }

    /// Platform-specific default artifact directory.
    ///
    /// - Linux: `~/.local/share/stayprice/`
    /// - macOS: `~/Library/Application Support/stayprice/`
    /// - Windows: `%APPDATA%\stayprice\`
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stayprice")
    }

    /// Load the feature schema.
    ///
    /// # Errors
    /// Returns an error if the file is missing, malformed, or violates the
    /// schema invariants.
    pub fn load_schema(&self) -> Result<FeatureSchema> {
        load_json(&self.features)
    }

    /// Load the categorical vocabularies.
    ///
    /// # Errors
    /// Returns an error if the file is missing, malformed, or a vocabulary is
    /// empty or repeats a label.
    pub fn load_vocabularies(&self) -> Result<VocabularySet> {
        load_json(&self.encoders)
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(Self::default_dir())
    }
}

/// Read and decode a JSON artifact.
///
/// # Errors
/// Returns [`ArtifactError::Io`] if the file cannot be read and
/// [`ArtifactError::Decode`] if its contents do not match `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "loading artifact");

    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
