//! Training-time feature schema.
//!
//! The schema is the ordered list of column names the regression model was
//! fit against. The model has no notion of column names at inference time,
//! so every row handed to it must follow this order exactly.

use crate::error::{ArtifactError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered, duplicate-free list of model input columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from column names in model order.
    ///
    /// # Errors
    /// Returns an error if the list is empty or names a column twice.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(ArtifactError::EmptySchema);
        }

        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            if positions.insert(name.clone(), idx).is_some() {
                return Err(ArtifactError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self { columns, positions })
    }

    /// Column names in model order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column, if the model was trained with it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Check whether the model was trained with a column.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a validated schema; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over column names in model order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Columns of `required` that the schema lacks, in the order given.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect()
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = ArtifactError;

    fn try_from(columns: Vec<String>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.columns
    }
}
