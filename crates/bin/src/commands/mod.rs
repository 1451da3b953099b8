//! Subcommand implementations.
//!
//! Each submodule backs one or more CLI subcommands; `main.rs` only parses
//! arguments and dispatches.

pub(crate) mod batch;
pub(crate) mod inspect;
pub(crate) mod logging;

#[cfg(test)]
pub(crate) mod fixtures {
    use stayprice::ArtifactStore;
    use stayprice::artifacts::{CategoryVocabulary, FeatureSchema, VocabularySet};
    use stayprice::model::LinearRegressor;

    /// Five-column store pricing a hotel at `1000 * score + 2 * reviews`.
    pub(crate) fn store() -> ArtifactStore {
        let schema = FeatureSchema::new([
            "District",
            "transportation_Facitities",
            "score",
            "reviews",
            "total_beds_log",
        ])
        .unwrap();

        let mut vocabularies = VocabularySet::new();
        vocabularies
            .insert(CategoryVocabulary::new("District", ["New Delhi", "South Delhi"]).unwrap());
        vocabularies
            .insert(CategoryVocabulary::new("transportation_Facitities", ["Metro"]).unwrap());

        let model = LinearRegressor::new(vec![0.0, 0.0, 1000.0, 2.0, 0.0], 0.0).unwrap();
        ArtifactStore::from_parts(schema, vocabularies, model.into()).unwrap()
    }
}
