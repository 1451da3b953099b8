//! Single model input row.

use crate::error::{EncodeError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use stayprice_artifacts::FeatureSchema;

/// One value per schema column, in schema order.
///
/// A row starts out all zero and is filled in column by column. Only columns
/// the schema contains can be written, so the row can never drift from the
/// schema's width or order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow<'a> {
    schema: &'a FeatureSchema,
    values: Vec<f64>,
}

impl<'a> FeatureRow<'a> {
    /// Zero-initialised row for a schema.
    pub fn zeros(schema: &'a FeatureSchema) -> Self {
        Self {
            schema,
            values: vec![0.0; schema.len()],
        }
    }

    /// Write a column the schema must contain.
    ///
    /// # Errors
    /// Returns [`EncodeError::SchemaMismatch`] if the column is unknown.
    pub fn set(&mut self, column: &str, value: f64) -> Result<()> {
        let idx = self
            .schema
            .position(column)
            .ok_or_else(|| EncodeError::SchemaMismatch(vec![column.to_string()]))?;
        self.values[idx] = value;
        Ok(())
    }

    /// Write a column if the schema has it. Returns whether it was written.
    pub fn set_if_present(&mut self, column: &str, value: f64) -> bool {
        match self.schema.position(column) {
            Some(idx) => {
                self.values[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Value of a column, if the schema has it.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.schema.position(column).map(|idx| self.values[idx])
    }

    /// Values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Schema this row follows.
    pub const fn schema(&self) -> &'a FeatureSchema {
        self.schema
    }

    /// Iterate over `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.schema.iter().zip(self.values.iter().copied())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the row, returning its values in schema order.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Serialize for FeatureRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}
