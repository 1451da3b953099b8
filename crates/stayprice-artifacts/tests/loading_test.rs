//! Integration tests for loading artifacts from disk.

use std::fs;
use stayprice_artifacts::{ArtifactError, ArtifactPaths, CategoryEncoder};

fn write_artifacts(dir: &std::path::Path, features: &str, encoders: &str) -> ArtifactPaths {
    let paths = ArtifactPaths::in_dir(dir);
    fs::write(&paths.features, features).unwrap();
    fs::write(&paths.encoders, encoders).unwrap();
    paths
}

#[test]
fn test_load_schema_and_vocabularies() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(
        dir.path(),
        r#"["District", "transportation_Facitities", "score", "reviews", "total_beds_log"]"#,
        r#"{
            "District": {"classes": ["Central Delhi", "East Delhi", "New Delhi", "South Delhi"]},
            "transportation_Facitities": {"classes": ["Bus", "Metro", "Railway"]}
        }"#,
    );

    let schema = paths.load_schema().unwrap();
    assert_eq!(schema.len(), 5);
    assert_eq!(schema.position("total_beds_log"), Some(4));

    let vocabularies = paths.load_vocabularies().unwrap();
    let district = vocabularies.require("District").unwrap();
    assert_eq!(district.encode("South Delhi"), Ok(3));
    let transport = vocabularies.require("transportation_Facitities").unwrap();
    assert_eq!(transport.encode("Metro"), Ok(1));
}

#[test]
fn test_corrupt_schema_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), "not json", "{}");

    let err = paths.load_schema().unwrap_err();
    assert!(matches!(err, ArtifactError::Decode { .. }));
    assert!(err.to_string().contains("features.json"));
}

#[test]
fn test_duplicate_column_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), r#"["score", "score"]"#, "{}");

    assert!(paths.load_schema().is_err());
}

#[test]
fn test_missing_encoders_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());

    let err = paths.load_vocabularies().unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
}
