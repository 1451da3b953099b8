//! Raw hotel attributes supplied by the user.

use crate::error::{EncodeError, Result};
use crate::room::RoomCategory;
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest accepted customer score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted customer score.
pub const MAX_SCORE: f64 = 10.0;
/// Customer score used when none is given.
pub const DEFAULT_SCORE: f64 = 8.0;
/// Review count used when none is given.
pub const DEFAULT_REVIEWS: i64 = 50;
/// Bed count used when none is given.
pub const DEFAULT_BEDS: i64 = 1;

/// One prediction request.
///
/// Counts are signed so that out-of-domain values reach validation and are
/// reported, instead of failing to parse. A numeric field that is absent,
/// blank or `null` takes the form default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelInput {
    /// District label, from the district vocabulary
    pub district: String,
    /// Transportation facility label, from the transport vocabulary
    pub transport: String,
    /// Room category
    pub room: RoomCategory,
    /// Customer score (0.0 to 10.0)
    #[serde(default = "default_score", deserialize_with = "score_or_default")]
    pub score: f64,
    /// Number of reviews (non-negative)
    #[serde(default = "default_reviews", deserialize_with = "reviews_or_default")]
    pub reviews: i64,
    /// Number of beds (at least 1)
    #[serde(default = "default_beds", deserialize_with = "beds_or_default")]
    pub beds: i64,
}

const fn default_score() -> f64 {
    DEFAULT_SCORE
}

const fn default_reviews() -> i64 {
    DEFAULT_REVIEWS
}

const fn default_beds() -> i64 {
    DEFAULT_BEDS
}

fn blank_or<'de, D, T>(deserializer: D, fallback: T) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or(fallback))
}

fn score_or_default<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    blank_or(deserializer, DEFAULT_SCORE)
}

fn reviews_or_default<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    blank_or(deserializer, DEFAULT_REVIEWS)
}

fn beds_or_default<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    blank_or(deserializer, DEFAULT_BEDS)
}

impl HotelInput {
    /// Create a request with the default score, review count and bed count.
    pub fn new(
        district: impl Into<String>,
        transport: impl Into<String>,
        room: RoomCategory,
    ) -> Self {
        Self {
            district: district.into(),
            transport: transport.into(),
            room,
            score: DEFAULT_SCORE,
            reviews: DEFAULT_REVIEWS,
            beds: DEFAULT_BEDS,
        }
    }

    /// Set the customer score.
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Set the review count.
    pub const fn with_reviews(mut self, reviews: i64) -> Self {
        self.reviews = reviews;
        self
    }

    /// Set the bed count.
    pub const fn with_beds(mut self, beds: i64) -> Self {
        self.beds = beds;
        self
    }

    /// Check the numeric fields against their domains.
    ///
    /// # Errors
    /// Returns [`EncodeError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(EncodeError::invalid(
                "score",
                format!(
                    "{} is outside {MIN_SCORE:.1}..={MAX_SCORE:.1}",
                    self.score
                ),
            ));
        }

        if self.reviews < 0 {
            return Err(EncodeError::invalid(
                "reviews",
                format!("{} is negative", self.reviews),
            ));
        }

        if self.beds < 1 {
            return Err(EncodeError::invalid(
                "beds",
                format!("{} is below the minimum of 1", self.beds),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input() -> HotelInput {
        HotelInput::new("South Delhi", "Metro", RoomCategory::Standard)
    }

    #[test]
    fn test_defaults() {
        let input = input();
        assert_eq!(input.score, 8.0);
        assert_eq!(input.reviews, 50);
        assert_eq!(input.beds, 1);
        assert!(input.validate().is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(10.0)]
    #[case(7.3)]
    fn test_score_in_range(#[case] score: f64) {
        assert!(input().with_score(score).validate().is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(10.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_score_out_of_range(#[case] score: f64) {
        let err = input().with_score(score).validate().unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { field: "score", .. }));
    }

    #[test]
    fn test_negative_reviews() {
        let err = input().with_reviews(-1).validate().unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { field: "reviews", .. }));
        assert!(input().with_reviews(0).validate().is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn test_beds_below_one(#[case] beds: i64) {
        let err = input().with_beds(beds).validate().unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { field: "beds", .. }));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let input: HotelInput = serde_json::from_str(
            r#"{"district": "New Delhi", "transport": "Bus", "room": "Suite/Luxury"}"#,
        )
        .unwrap();
        assert_eq!(input.room, RoomCategory::Suite);
        assert_eq!(input.score, DEFAULT_SCORE);
        assert_eq!(input.reviews, DEFAULT_REVIEWS);
        assert_eq!(input.beds, DEFAULT_BEDS);
    }

    #[test]
    fn test_deserialize_null_uses_defaults() {
        let input: HotelInput = serde_json::from_str(
            r#"{"district": "New Delhi", "transport": "Bus", "room": "suite",
                "score": null, "reviews": 12, "beds": null}"#,
        )
        .unwrap();
        assert_eq!(input.score, DEFAULT_SCORE);
        assert_eq!(input.reviews, 12);
        assert_eq!(input.beds, DEFAULT_BEDS);
    }
}
