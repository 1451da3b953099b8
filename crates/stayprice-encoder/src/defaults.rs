//! Values for columns the model was trained on but the user is never asked for.
//!
//! These are fixed stand-ins, not statistics of the training data. Predictions
//! for listings far from the centre, or with several bed types, are biased
//! accordingly.

use serde::{Deserialize, Serialize};

/// Fallback values for uncollected columns.
///
/// `is_dormitory` is not configurable: it is always derived from the room
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackDefaults {
    /// Distance to the city centre in km (default: 5.0)
    pub center_distance_km: f64,

    /// Missing-distance flag (default: 0.0)
    pub distance_missing: f64,

    /// Multiple-bed-types flag (default: 0.0)
    pub multiple_bed_types: f64,
}

impl Default for FallbackDefaults {
    fn default() -> Self {
        Self {
            center_distance_km: 5.0,
            distance_missing: 0.0,
            multiple_bed_types: 0.0,
        }
    }
}
