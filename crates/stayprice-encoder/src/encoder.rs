//! Feature row assembly.
//!
//! Maps the sparse user input onto the model's full column set:
//!
//! 1. Start from an all-zero row in schema order
//! 2. Label-encode district and transport
//! 3. Copy score and review count as given
//! 4. `total_beds_log = ln(1 + beds)`
//! 5. Fill uncollected columns the schema has with [`FallbackDefaults`]
//! 6. One-hot the room category, if its column survived training
//!
//! Any failure aborts the whole row; a partially filled row is never returned.

use crate::defaults::FallbackDefaults;
use crate::error::{EncodeError, Result};
use crate::input::HotelInput;
use crate::registry::{
    CENTER_DISTANCE_KM, DISTANCE_MISSING, DISTRICT, IS_DORMITORY, MULTIPLE_BED_TYPES,
    REQUIRED_COLUMNS, REVIEWS, SCORE, TOTAL_BEDS_LOG, TRANSPORT,
};
use crate::row::FeatureRow;
use stayprice_artifacts::{CategoryEncoder, FeatureSchema};
use std::fmt;
use tracing::trace;

/// Builds model input rows from hotel attributes.
///
/// The schema and vocabularies are borrowed, never owned: they are loaded
/// once and shared read-only by every request.
pub struct FeatureEncoder<'a> {
    schema: &'a FeatureSchema,
    district: &'a dyn CategoryEncoder,
    transport: &'a dyn CategoryEncoder,
    defaults: FallbackDefaults,
}

impl<'a> FeatureEncoder<'a> {
    /// Create an encoder over a schema and the two categorical vocabularies.
    ///
    /// # Errors
    /// Returns [`EncodeError::SchemaMismatch`] listing every always-written
    /// column the schema lacks.
    pub fn new(
        schema: &'a FeatureSchema,
        district: &'a dyn CategoryEncoder,
        transport: &'a dyn CategoryEncoder,
    ) -> Result<Self> {
        let missing = schema.missing(REQUIRED_COLUMNS);
        if !missing.is_empty() {
            return Err(EncodeError::SchemaMismatch(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        Ok(Self {
            schema,
            district,
            transport,
            defaults: FallbackDefaults::default(),
        })
    }

    /// Replace the fallback values for uncollected columns.
    pub const fn with_defaults(mut self, defaults: FallbackDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Fallback values in use.
    pub const fn defaults(&self) -> &FallbackDefaults {
        &self.defaults
    }

    /// Schema rows are built against.
    pub const fn schema(&self) -> &'a FeatureSchema {
        self.schema
    }

    /// Assemble the model input row for one request.
    ///
    /// # Errors
    /// Returns [`EncodeError::InvalidInput`] for out-of-domain numbers and
    /// [`EncodeError::UnknownCategory`] for labels outside the vocabularies.
    pub fn encode(&self, input: &HotelInput) -> Result<FeatureRow<'a>> {
        input.validate()?;

        let mut row = FeatureRow::zeros(self.schema);

        row.set(DISTRICT, f64::from(self.district.encode(&input.district)?))?;
        row.set(TRANSPORT, f64::from(self.transport.encode(&input.transport)?))?;

        row.set(SCORE, input.score)?;
        row.set(REVIEWS, input.reviews as f64)?;
        row.set(TOTAL_BEDS_LOG, (input.beds as f64).ln_1p())?;

        row.set_if_present(CENTER_DISTANCE_KM, self.defaults.center_distance_km);
        row.set_if_present(DISTANCE_MISSING, self.defaults.distance_missing);
        row.set_if_present(IS_DORMITORY, indicator(input.room.is_dormitory()));
        row.set_if_present(MULTIPLE_BED_TYPES, self.defaults.multiple_bed_types);

        if !row.set_if_present(input.room.column(), 1.0) {
            trace!(
                column = input.room.column(),
                "room category column not in schema, leaving all indicators at zero"
            );
        }

        Ok(row)
    }
}

impl fmt::Debug for FeatureEncoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureEncoder")
            .field("columns", &self.schema.len())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

const fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
