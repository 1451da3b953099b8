//! Read-only store of training artifacts.
//!
//! Holds the three objects produced by offline training: the regression
//! model, the ordered feature schema, and the categorical vocabularies.
//! Loaded once at startup; any problem here is fatal.

use crate::error::Result;
use crate::service::PricePredictor;
use stayprice_artifacts::{ArtifactPaths, CategoryVocabulary, FeatureSchema, VocabularySet};
use stayprice_encoder::registry::{DISTRICT, TRANSPORT};
use stayprice_encoder::{FallbackDefaults, FeatureEncoder};
use stayprice_model::RegressionModel;
use tracing::{debug, info};

/// Training artifacts shared by every request.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    schema: FeatureSchema,
    district: CategoryVocabulary,
    transport: CategoryVocabulary,
    model: RegressionModel,
}

impl ArtifactStore {
    /// Load all artifacts from disk.
    ///
    /// # Errors
    /// Returns an error if any file is missing or corrupt, a required
    /// vocabulary is absent, or the model width differs from the schema.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let model = RegressionModel::load(&paths.model)?;
        let schema = paths.load_schema()?;
        let vocabularies = paths.load_vocabularies()?;

        let store = Self::from_parts(schema, vocabularies, model)?;
        info!(
            columns = store.schema.len(),
            districts = store.districts().len(),
            transports = store.transports().len(),
            "artifact store ready"
        );
        Ok(store)
    }

    /// Assemble a store from already loaded artifacts.
    ///
    /// Vocabularies for fields the encoder does not read are dropped.
    ///
    /// # Errors
    /// Returns an error if the district or transport vocabulary is missing,
    /// the schema lacks a column the encoder always writes, or the model
    /// width differs from the schema.
    pub fn from_parts(
        schema: FeatureSchema,
        mut vocabularies: VocabularySet,
        model: RegressionModel,
    ) -> Result<Self> {
        let district = vocabularies.take(DISTRICT)?;
        let transport = vocabularies.take(TRANSPORT)?;
        for field in vocabularies.fields() {
            debug!(field, "ignoring vocabulary the encoder does not use");
        }

        let store = Self {
            schema,
            district,
            transport,
            model,
        };
        store.predictor(FallbackDefaults::default())?;
        Ok(store)
    }

    /// Ordered feature schema.
    pub const fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Trained model.
    pub const fn model(&self) -> &RegressionModel {
        &self.model
    }

    /// District vocabulary.
    pub const fn districts(&self) -> &CategoryVocabulary {
        &self.district
    }

    /// Transportation facility vocabulary.
    pub const fn transports(&self) -> &CategoryVocabulary {
        &self.transport
    }

    /// Feature encoder over this store's schema and vocabularies.
    ///
    /// # Errors
    /// Returns an error if the schema lacks a column the encoder always
    /// writes.
    pub fn encoder(&self) -> Result<FeatureEncoder<'_>> {
        Ok(FeatureEncoder::new(
            &self.schema,
            &self.district,
            &self.transport,
        )?)
    }

    /// Encode-then-predict pipeline borrowing this store.
    ///
    /// # Errors
    /// Returns an error if the schema lacks a column the encoder always
    /// writes, or the model width differs from the schema.
    pub fn predictor(&self, defaults: FallbackDefaults) -> Result<PricePredictor<'_>> {
        PricePredictor::new(self.encoder()?.with_defaults(defaults), &self.model)
    }
}
