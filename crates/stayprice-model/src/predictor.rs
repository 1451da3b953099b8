//! Predictor trait

use crate::error::{ModelError, Result};

/// A trained regression function over fixed-width rows.
///
/// Implementations are pure: the same row always yields the same value.
/// Rows carry no column names, so callers must supply values in training
/// order.
pub trait Predictor {
    /// Number of features the model was trained on.
    fn n_features(&self) -> usize;

    /// Evaluate the model on a row already known to have the right width.
    fn predict_unchecked(&self, features: &[f64]) -> f64;

    /// Predict a single value.
    ///
    /// # Errors
    /// Returns an error if the row width differs from [`Self::n_features`] or
    /// the model output is not finite.
    fn predict(&self, features: &[f64]) -> Result<f64> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(ModelError::FeatureCountMismatch {
                expected,
                actual: features.len(),
            });
        }

        let value = self.predict_unchecked(features);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ModelError::NonFinitePrediction(value))
        }
    }
}
