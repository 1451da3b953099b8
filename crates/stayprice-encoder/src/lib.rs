#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stayprice/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod defaults;
pub mod encoder;
pub mod error;
pub mod input;
pub mod registry;
pub mod room;
pub mod row;

pub use defaults::FallbackDefaults;
pub use encoder::FeatureEncoder;
pub use error::{EncodeError, Result};
pub use input::HotelInput;
pub use room::{ParseRoomCategoryError, RoomCategory};
pub use row::FeatureRow;

// Re-export registry types for convenience
pub use registry::{FeatureInfo, FeatureSource, get_feature_info, known_features};
