//! Fitted label encodings for categorical fields.
//!
//! A vocabulary is the ordered list of labels a label encoder saw during
//! training. A label's code is its position in that list. Codes are what the
//! model was trained on, so an unknown label has no meaningful encoding and
//! must be rejected rather than mapped to some fallback value.

use crate::error::{ArtifactError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A label that is not part of a field's training vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field} category: {label:?}")]
pub struct UnknownCategory {
    /// Categorical field that was being encoded
    pub field: String,
    /// Label that has no code
    pub label: String,
}

/// Label-to-code lookup for one categorical field.
pub trait CategoryEncoder {
    /// Map a label to its training-time integer code.
    ///
    /// # Errors
    /// Returns [`UnknownCategory`] if the label was not seen during training.
    fn encode(&self, label: &str) -> std::result::Result<u32, UnknownCategory>;
}

/// On-disk shape of a single vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVocabulary {
    /// Labels in code order
    pub classes: Vec<String>,
}

/// Ordered label set with a one-to-one mapping to integer codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocabulary {
    field: String,
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryVocabulary {
    /// Build a vocabulary whose codes follow the order of `classes`.
    ///
    /// # Errors
    /// Returns an error if `classes` is empty or repeats a label.
    pub fn new<I, S>(field: impl Into<String>, classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = field.into();
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(ArtifactError::EmptyVocabulary(field));
        }

        let mut codes = HashMap::with_capacity(classes.len());
        for (code, label) in (0u32..).zip(classes.iter()) {
            if codes.insert(label.clone(), code).is_some() {
                return Err(ArtifactError::DuplicateLabel {
                    field,
                    label: label.clone(),
                });
            }
        }

        Ok(Self {
            field,
            classes,
            codes,
        })
    }

    /// Fit a vocabulary from observed labels.
    ///
    /// Labels are sorted and de-duplicated before codes are assigned, the
    /// same way the offline label encoder assigns them.
    ///
    /// # Errors
    /// Returns an error if no labels are given.
    pub fn fit<I, S>(field: impl Into<String>, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self::new(field, classes)
    }

    /// Categorical field this vocabulary encodes.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Known labels in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Label assigned to a code.
    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    /// Check whether a label is known.
    pub fn contains(&self, label: &str) -> bool {
        self.codes.contains_key(label)
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a validated vocabulary; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl CategoryEncoder for CategoryVocabulary {
    fn encode(&self, label: &str) -> std::result::Result<u32, UnknownCategory> {
        self.codes.get(label).copied().ok_or_else(|| UnknownCategory {
            field: self.field.clone(),
            label: label.to_string(),
        })
    }
}

/// All vocabularies produced by training, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, RawVocabulary>",
    into = "BTreeMap<String, RawVocabulary>"
)]
pub struct VocabularySet {
    vocabularies: BTreeMap<String, CategoryVocabulary>,
}

impl VocabularySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vocabulary, replacing any previous one for the same field.
    pub fn insert(&mut self, vocabulary: CategoryVocabulary) {
        self.vocabularies
            .insert(vocabulary.field().to_string(), vocabulary);
    }

    /// Vocabulary for a field, if present.
    pub fn get(&self, field: &str) -> Option<&CategoryVocabulary> {
        self.vocabularies.get(field)
    }

    /// Vocabulary for a field the application cannot run without.
    ///
    /// # Errors
    /// Returns [`ArtifactError::MissingVocabulary`] if training produced none.
    pub fn require(&self, field: &str) -> Result<&CategoryVocabulary> {
        self.get(field)
            .ok_or_else(|| ArtifactError::MissingVocabulary(field.to_string()))
    }

    /// Move a required vocabulary out of the set.
    ///
    /// # Errors
    /// Returns [`ArtifactError::MissingVocabulary`] if training produced none.
    pub fn take(&mut self, field: &str) -> Result<CategoryVocabulary> {
        self.vocabularies
            .remove(field)
            .ok_or_else(|| ArtifactError::MissingVocabulary(field.to_string()))
    }

    /// Field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.vocabularies.keys().map(String::as_str)
    }

    /// Number of vocabularies.
    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    /// Check whether the set holds no vocabularies.
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

impl TryFrom<BTreeMap<String, RawVocabulary>> for VocabularySet {
    type Error = ArtifactError;

    fn try_from(raw: BTreeMap<String, RawVocabulary>) -> Result<Self> {
        let mut set = Self::new();
        for (field, vocab) in raw {
            set.insert(CategoryVocabulary::new(field, vocab.classes)?);
        }
        Ok(set)
    }
}

impl From<VocabularySet> for BTreeMap<String, RawVocabulary> {
    fn from(set: VocabularySet) -> Self {
        set.vocabularies
            .into_iter()
            .map(|(field, vocab)| {
                (
                    field,
                    RawVocabulary {
                        classes: vocab.classes,
                    },
                )
            })
            .collect()
    }
}
