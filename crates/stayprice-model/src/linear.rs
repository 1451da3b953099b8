//! Linear regression: ŷ(x) = b + w · x

use crate::error::{ModelError, Result};
use crate::predictor::Predictor;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearParams {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Ordinary linear model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LinearParams", into = "LinearParams")]
pub struct LinearRegressor {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegressor {
    /// Build a model from its coefficients (one per feature) and intercept.
    ///
    /// # Errors
    /// Returns [`ModelError::Invalid`] if there are no coefficients or any
    /// parameter is not finite.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            coefficients: Array1::from(coefficients),
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(ModelError::Invalid("linear model has no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Invalid(
                "linear model has non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }

    /// Coefficients in feature order.
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// Intercept term.
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl From<LinearParams> for LinearRegressor {
    fn from(params: LinearParams) -> Self {
        Self {
            coefficients: Array1::from(params.coefficients),
            intercept: params.intercept,
        }
    }
}

impl From<LinearRegressor> for LinearParams {
    fn from(model: LinearRegressor) -> Self {
        Self {
            coefficients: model.coefficients.to_vec(),
            intercept: model.intercept,
        }
    }
}

impl Predictor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_unchecked(&self, features: &[f64]) -> f64 {
        self.intercept + ArrayView1::from(features).dot(&self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_predict() {
        let model = LinearRegressor::new(vec![120.0, 2.0, 900.0], 1500.0).unwrap();
        let price = model.predict(&[8.0, 50.0, 3.0_f64.ln()]).unwrap();
        assert_relative_eq!(price, 1500.0 + 960.0 + 100.0 + 900.0 * 3.0_f64.ln());
    }

    #[test]
    fn test_width_from_coefficients() {
        let model = LinearRegressor::new(vec![1.0, 2.0], 0.0).unwrap();
        assert_eq!(model.n_features(), 2);
        assert!(model.predict(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(LinearRegressor::new(Vec::new(), 0.0).is_err());
        assert!(LinearRegressor::new(vec![f64::NAN], 0.0).is_err());
        assert!(LinearRegressor::new(vec![1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"coefficients": [0.5, -1.0], "intercept": 10.0}"#;
        let model: LinearRegressor = serde_json::from_str(json).unwrap();
        assert_eq!(model.intercept(), 10.0);
        assert_eq!(model.coefficients().to_vec(), vec![0.5, -1.0]);

        let back = serde_json::to_value(&model).unwrap();
        assert_eq!(back["coefficients"][1], -1.0);
    }
}
