#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stayprice/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod service;
pub mod store;

// Re-export main types from sub-crates
pub use stayprice_artifacts as artifacts;
pub use stayprice_encoder as encoder;
pub use stayprice_model as model;
pub use stayprice_output as output;

pub use config::AppConfig;
pub use error::{PredictError, Result};
pub use service::{Prediction, PricePredictor};
pub use store::ArtifactStore;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
