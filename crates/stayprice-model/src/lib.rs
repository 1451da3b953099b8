#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stayprice/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod error;
pub mod gradient_boosting;
pub mod linear;
pub mod predictor;
pub mod tree;

pub use artifact::RegressionModel;
pub use error::{ModelError, Result};
pub use gradient_boosting::GradientBoostingRegressor;
pub use linear::LinearRegressor;
pub use predictor::Predictor;
pub use tree::{RegressionTree, TreeNode};
