//! `options` and `schema` subcommands.

use serde::Serialize;
use stayprice::ArtifactStore;
use stayprice::encoder::RoomCategory;
use stayprice::encoder::registry::get_feature_info;

/// Values accepted by `predict`.
#[derive(Debug, Serialize)]
pub(crate) struct FormOptions<'a> {
    pub(crate) districts: &'a [String],
    pub(crate) transports: &'a [String],
    pub(crate) rooms: Vec<&'static str>,
}

impl<'a> FormOptions<'a> {
    pub(crate) fn from_store(store: &'a ArtifactStore) -> Self {
        Self {
            districts: store.districts().classes(),
            transports: store.transports().classes(),
            rooms: RoomCategory::all().iter().map(|r| r.label()).collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        for (title, values) in [
            ("Districts", self.districts.iter().map(String::as_str).collect::<Vec<_>>()),
            ("Transportation", self.transports.iter().map(String::as_str).collect()),
            ("Room categories", self.rooms.clone()),
        ] {
            out.push_str(title);
            out.push_str(":\n");
            for value in values {
                out.push_str("  ");
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

pub(crate) fn print_options(store: &ArtifactStore, json: bool) -> Result<(), serde_json::Error> {
    let options = FormOptions::from_store(store);
    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        print!("{}", options.to_text());
    }
    Ok(())
}

pub(crate) fn print_schema(store: &ArtifactStore) {
    println!("{:>3}  {:<28} Description", "#", "Column");
    for (i, column) in store.schema().iter().enumerate() {
        let description =
            get_feature_info(column).map_or("(not written by the encoder)", |f| f.description);
        println!("{:>3}  {:<28} {}", i, column, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayprice::artifacts::{CategoryVocabulary, FeatureSchema, VocabularySet};
    use stayprice::model::LinearRegressor;

    #[test]
    fn test_options_follow_vocabulary_order() {
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
            .insert(CategoryVocabulary::fit("District", ["West Delhi", "East Delhi"]).unwrap());
        vocabularies
            .insert(CategoryVocabulary::new("transportation_Facitities", ["Metro"]).unwrap());
        let model = LinearRegressor::new(vec![0.0; 5], 1.0).unwrap();
        let store = ArtifactStore::from_parts(schema, vocabularies, model.into()).unwrap();

        let options = FormOptions::from_store(&store);
        assert_eq!(options.districts, ["East Delhi", "West Delhi"]);
        assert_eq!(options.rooms.len(), 6);

        let text = options.to_text();
        assert!(text.starts_with("Districts:\n  East Delhi\n  West Delhi\n"));
        assert!(text.contains("Room categories:\n  Standard/Double\n"));
    }
}
