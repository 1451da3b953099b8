//! Room category definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room categories offered to the user (6 categories).
///
/// Each category maps to at most one indicator column in the feature schema.
/// The mapping is fixed and independent of the training vocabularies.
///
/// Serializes as the display label. Deserializes through [`FromStr`], so
/// batch rows accept the same aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RoomCategory {
    /// Standard or double room
    #[serde(rename = "Standard/Double")]
    Standard,

    /// Deluxe or superior room
    #[serde(rename = "Deluxe/Superior")]
    Deluxe,

    /// Premium or executive room
    #[serde(rename = "Premium/Executive")]
    Premium,

    /// Family or triple room
    #[serde(rename = "Family/Triple")]
    Family,

    /// Suite or luxury room
    #[serde(rename = "Suite/Luxury")]
    Suite,

    /// Shared dormitory bed
    #[serde(rename = "Dormitory")]
    Dormitory,
}

impl RoomCategory {
    /// Returns all room categories in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Standard,
            Self::Deluxe,
            Self::Premium,
            Self::Family,
            Self::Suite,
            Self::Dormitory,
        ]
    }

    /// Returns the label shown to the user.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard/Double",
            Self::Deluxe => "Deluxe/Superior",
            Self::Premium => "Premium/Executive",
            Self::Family => "Family/Triple",
            Self::Suite => "Suite/Luxury",
            Self::Dormitory => "Dormitory",
        }
    }

    /// Returns the one-hot indicator column for this category.
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Standard => "Room_Category_Standard",
            Self::Deluxe => "Room_Category_Deluxe",
            Self::Premium => "Room_Category_Premium",
            Self::Family => "Room_Category_Family",
            Self::Suite => "Room_Category_Suite",
            Self::Dormitory => "Room_Category_Dormitory",
        }
    }

    /// Indicator columns for every category.
    pub fn columns() -> Vec<&'static str> {
        Self::all().iter().map(Self::column).collect()
    }

    /// Parse a category from its exact display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }

    /// True for shared dormitory accommodation.
    pub const fn is_dormitory(&self) -> bool {
        matches!(self, Self::Dormitory)
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string names no room category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown room category: {0}")]
pub struct ParseRoomCategoryError(pub String);

impl FromStr for RoomCategory {
    type Err = ParseRoomCategoryError;

    /// Accepts the display label or a short alias, ignoring case and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Self::from_label(s) {
            return Ok(category);
        }

        let normalized = s.to_lowercase().replace([' ', '_', '-'], "");
        let category = match normalized.as_str() {
            "standard/double" | "standard" | "double" => Self::Standard,
            "deluxe/superior" | "deluxe" | "superior" => Self::Deluxe,
            "premium/executive" | "premium" | "executive" => Self::Premium,
            "family/triple" | "family" | "triple" => Self::Family,
            "suite/luxury" | "suite" | "luxury" => Self::Suite,
            "dormitory" | "dorm" => Self::Dormitory,
            _ => return Err(ParseRoomCategoryError(s.to_string())),
        };

        Ok(category)
    }
}

impl TryFrom<String> for RoomCategory {
    type Error = ParseRoomCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
