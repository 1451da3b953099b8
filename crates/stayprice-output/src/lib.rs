#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stayprice/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod currency;
pub mod export;
pub mod report;

pub use currency::format_inr;
pub use export::{BatchRecord, ExportError, ExportFormat, Exporter};
pub use report::{FeatureValue, PredictionReport};
