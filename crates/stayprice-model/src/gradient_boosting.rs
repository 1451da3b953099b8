//! Gradient Boosting Regressor
//!
//! Additive tree ensemble fit by least-squares gradient boosting:
//!
//! ŷ(x) = init + η * Σ_m tree_m(x)
//!
//! where:
//! - init = initial estimate (the training target mean)
//! - η = learning rate (shrinkage)
//! - tree_m = m-th regression tree fit to the residuals
//!
//! Trees split on raw feature values, so inputs need no scaling.

use crate::error::{ModelError, Result};
use crate::predictor::Predictor;
use crate::tree::RegressionTree;
use serde::{Deserialize, Serialize};

/// Gradient boosted regression trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingRegressor {
    /// Width of the rows the ensemble was trained on
    n_features: usize,
    /// Initial estimate added to every prediction
    init: f64,
    /// Shrinkage applied to each tree's output
    learning_rate: f64,
    /// Fitted trees in boosting order
    trees: Vec<RegressionTree>,
}

impl GradientBoostingRegressor {
    /// Build an ensemble and validate every tree.
    ///
    /// # Errors
    /// Returns [`ModelError::Invalid`] for a zero feature count, a
    /// non-positive or non-finite learning rate, a non-finite initial
    /// estimate, or an invalid tree.
    pub fn new(
        n_features: usize,
        init: f64,
        learning_rate: f64,
        trees: Vec<RegressionTree>,
    ) -> Result<Self> {
        let model = Self {
            n_features,
            init,
            learning_rate,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(ModelError::Invalid(
                "ensemble has zero features".to_string(),
            ));
        }
        if !self.init.is_finite() {
            return Err(ModelError::Invalid(format!(
                "initial estimate {} is not finite",
                self.init
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ModelError::Invalid(format!(
                "learning rate {} must be positive",
                self.learning_rate
            )));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| ModelError::Invalid(format!("tree {idx}: {e}")))?;
        }
        Ok(())
    }

    /// Number of boosting stages.
    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }

    /// Shrinkage applied to each stage.
    pub const fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Initial estimate.
    pub const fn init(&self) -> f64 {
        self.init
    }
}

impl Predictor for GradientBoostingRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_unchecked(&self, features: &[f64]) -> f64 {
        let boost: f64 = self.trees.iter().map(|t| t.evaluate(features)).sum();
        self.init + self.learning_rate * boost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn split(feature: usize, threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree::new(
            vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
            2,
        )
        .unwrap()
    }

    fn model() -> GradientBoostingRegressor {
        GradientBoostingRegressor::new(
            2,
            3000.0,
            0.1,
            vec![split(0, 7.0, -500.0, 800.0), split(1, 1.0, -200.0, 1500.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_prediction_is_shrunk_sum() {
        let model = model();
        assert_relative_eq!(model.predict(&[8.0, 0.69]).unwrap(), 3000.0 + 0.1 * 600.0);
        assert_relative_eq!(model.predict(&[6.0, 1.39]).unwrap(), 3000.0 + 0.1 * 1000.0);
    }

    #[test]
    fn test_no_trees_predicts_init() {
        let model = GradientBoostingRegressor::new(4, 2750.0, 0.05, Vec::new()).unwrap();
        assert_eq!(model.predict(&[0.0; 4]).unwrap(), 2750.0);
        assert_eq!(model.n_estimators(), 0);
    }

    #[test]
    fn test_width_mismatch() {
        let err = model().predict(&[8.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::FeatureCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_rejects_bad_learning_rate(#[case] rate: f64) {
        assert!(GradientBoostingRegressor::new(1, 0.0, rate, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_tree_wider_than_model() {
        let err = GradientBoostingRegressor::new(1, 0.0, 0.1, vec![split(1, 0.0, 1.0, 2.0)])
            .unwrap_err();
        assert!(err.to_string().contains("tree 0"));
    }
}
