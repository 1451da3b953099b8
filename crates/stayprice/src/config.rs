//! Application configuration.

use serde::{Deserialize, Serialize};
use stayprice_artifacts::{ArtifactPaths, load_json};
use stayprice_encoder::FallbackDefaults;
use std::path::{Path, PathBuf};

/// Settings read from an optional JSON config file.
///
/// ```json
/// {
///   "artifact_dir": "/srv/stayprice/models/2024-06",
///   "defaults": { "center_distance_km": 5.0 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the three artifacts under their default names
    /// (default: platform data directory)
    pub artifact_dir: Option<PathBuf>,

    /// Fallback values for columns the user is not asked for
    pub defaults: FallbackDefaults,
}

impl AppConfig {
    /// Read a config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid config
    /// JSON.
    pub fn load(path: &Path) -> stayprice_artifacts::Result<Self> {
        load_json(path)
    }

    /// Artifact locations, with `override_dir` taking precedence over the
    /// configured directory.
    pub fn artifact_paths(&self, override_dir: Option<&Path>) -> ArtifactPaths {
        override_dir
            .or(self.artifact_dir.as_deref())
            .map_or_else(ArtifactPaths::default, ArtifactPaths::in_dir)
    }
}
