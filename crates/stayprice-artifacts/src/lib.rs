#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stayprice/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod paths;
pub mod schema;
pub mod vocabulary;

pub use error::{ArtifactError, Result};
pub use paths::{ArtifactPaths, load_json};
pub use schema::FeatureSchema;
pub use vocabulary::{CategoryEncoder, CategoryVocabulary, UnknownCategory, VocabularySet};

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
