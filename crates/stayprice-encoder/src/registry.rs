//! Feature Registry
//!
//! Central list of the columns the encoder knows how to fill, and how each
//! one is sourced. Columns in the model schema that are not listed here stay
//! at zero.

use crate::room::RoomCategory;

/// Label-encoded district column.
pub const DISTRICT: &str = "District";
/// Label-encoded transport column. The spelling matches the training data.
pub const TRANSPORT: &str = "transportation_Facitities";
/// Customer score column.
pub const SCORE: &str = "score";
/// Review count column.
pub const REVIEWS: &str = "reviews";
/// `ln(1 + beds)` column.
pub const TOTAL_BEDS_LOG: &str = "total_beds_log";
/// Distance to the city centre in kilometres.
pub const CENTER_DISTANCE_KM: &str = "center_distance_km";
/// Flag set when the distance was missing from the listing.
pub const DISTANCE_MISSING: &str = "distance_missing";
/// Flag set for dormitory accommodation.
pub const IS_DORMITORY: &str = "is_dormitory";
/// Flag set when the listing offers several bed types.
pub const MULTIPLE_BED_TYPES: &str = "multiple_bed_types";

/// Columns the encoder always writes; the schema must contain all of them.
pub const REQUIRED_COLUMNS: &[&str] = &[DISTRICT, TRANSPORT, SCORE, REVIEWS, TOTAL_BEDS_LOG];

/// How a column's value is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSource {
    /// Integer code from a training vocabulary
    LabelEncoded,
    /// User value written as given
    Numeric,
    /// Transformed user value
    Derived,
    /// Not collected from the user; filled with a fixed default
    Fallback,
    /// One-hot indicator for the room category
    OneHot,
}

/// Feature metadata
#[derive(Debug, Clone)]
pub struct FeatureInfo {
    /// Column name in the model schema
    pub name: &'static str,
    /// Where the value comes from
    pub source: FeatureSource,
    /// Whether the schema must contain the column
    pub required: bool,
    /// Brief description
    pub description: &'static str,
}

/// Get all columns the encoder can fill
pub fn known_features() -> Vec<FeatureInfo> {
    let mut features = vec![
        FeatureInfo {
            name: DISTRICT,
            source: FeatureSource::LabelEncoded,
            required: true,
            description: "Delhi district of the hotel",
        },
        FeatureInfo {
            name: TRANSPORT,
            source: FeatureSource::LabelEncoded,
            required: true,
            description: "Nearest transportation facility",
        },
        FeatureInfo {
            name: SCORE,
            source: FeatureSource::Numeric,
            required: true,
            description: "Customer score from 0 to 10",
        },
        FeatureInfo {
            name: REVIEWS,
            source: FeatureSource::Numeric,
            required: true,
            description: "Number of customer reviews",
        },
        FeatureInfo {
            name: TOTAL_BEDS_LOG,
            source: FeatureSource::Derived,
            required: true,
            description: "Natural log of one plus the number of beds",
        },
        FeatureInfo {
            name: CENTER_DISTANCE_KM,
            source: FeatureSource::Fallback,
            required: false,
            description: "Distance to the city centre (representative constant)",
        },
        FeatureInfo {
            name: DISTANCE_MISSING,
            source: FeatureSource::Fallback,
            required: false,
            description: "Distance was missing from the listing",
        },
        FeatureInfo {
            name: IS_DORMITORY,
            source: FeatureSource::Fallback,
            required: false,
            description: "Accommodation is a dormitory (from room category)",
        },
        FeatureInfo {
            name: MULTIPLE_BED_TYPES,
            source: FeatureSource::Fallback,
            required: false,
            description: "Listing offers several bed types",
        },
    ];

    features.extend(RoomCategory::all().into_iter().map(|category| FeatureInfo {
        name: category.column(),
        source: FeatureSource::OneHot,
        required: false,
        description: category.label(),
    }));

    features
}

/// Get feature info by column name
pub fn get_feature_info(name: &str) -> Option<FeatureInfo> {
    known_features().into_iter().find(|f| f.name == name)
}

/// Get features by source
pub fn features_by_source(source: FeatureSource) -> Vec<FeatureInfo> {
    known_features()
        .into_iter()
        .filter(|f| f.source == source)
        .collect()
}
