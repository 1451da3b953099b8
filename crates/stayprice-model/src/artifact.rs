//! Serialized model artifact.
//!
//! The artifact is a JSON object tagged by `kind`:
//!
//! ```json
//! {"kind": "gradient_boosting", "n_features": 15, "init": 3120.4,
//!  "learning_rate": 0.1, "trees": [{"nodes": [...]}]}
//! {"kind": "linear", "coefficients": [...], "intercept": 1500.0}
//! ```

use crate::error::Result;
use crate::gradient_boosting::GradientBoostingRegressor;
use crate::linear::LinearRegressor;
use crate::predictor::Predictor;
use serde::{Deserialize, Serialize};
use stayprice_artifacts::{ArtifactError, load_json};
use std::path::Path;
use tracing::info;

/// Any model the offline training pipeline can export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    /// Gradient boosted regression trees
    GradientBoosting(GradientBoostingRegressor),
    /// Ordinary linear regression
    Linear(LinearRegressor),
}

impl RegressionModel {
    /// Load and validate a model artifact.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded, or if the
    /// decoded model is structurally invalid.
    pub fn load(path: &Path) -> stayprice_artifacts::Result<Self> {
        let model: Self = load_json(path)?;
        model
            .validate()
            .map_err(|e| ArtifactError::InvalidModel(e.to_string()))?;

        info!(
            path = %path.display(),
            kind = model.kind(),
            n_features = model.n_features(),
            "loaded regression model"
        );
        Ok(model)
    }

    /// Check the decoded parameters.
    ///
    /// # Errors
    /// Returns the first structural problem found.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::GradientBoosting(model) => model.validate(),
            Self::Linear(model) => model.validate(),
        }
    }

    /// Short name of the model family.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::GradientBoosting(_) => "gradient_boosting",
            Self::Linear(_) => "linear",
        }
    }
}

impl Predictor for RegressionModel {
    fn n_features(&self) -> usize {
        match self {
            Self::GradientBoosting(model) => model.n_features(),
            Self::Linear(model) => model.n_features(),
        }
    }

    fn predict_unchecked(&self, features: &[f64]) -> f64 {
        match self {
            Self::GradientBoosting(model) => model.predict_unchecked(features),
            Self::Linear(model) => model.predict_unchecked(features),
        }
    }
}

impl From<GradientBoostingRegressor> for RegressionModel {
    fn from(model: GradientBoostingRegressor) -> Self {
        Self::GradientBoosting(model)
    }
}

impl From<LinearRegressor> for RegressionModel {
    fn from(model: LinearRegressor) -> Self {
        Self::Linear(model)
    }
}
