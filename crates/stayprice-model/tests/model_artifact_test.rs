//! Integration tests for loading model artifacts from disk.

use approx::assert_relative_eq;
use std::fs;
use stayprice_artifacts::ArtifactError;
use stayprice_model::{Predictor, RegressionModel};

const BOOSTED: &str = r#"{
    "kind": "gradient_boosting",
    "n_features": 3,
    "init": 3000.0,
    "learning_rate": 0.5,
    "trees": [
        {"nodes": [
            {"split": {"feature": 2, "threshold": 1.0, "left": 1, "right": 2}},
            {"leaf": {"value": -400.0}},
            {"leaf": {"value": 1200.0}}
        ]},
        {"nodes": [
            {"split": {"feature": 0, "threshold": 7.0, "left": 1, "right": 2}},
            {"leaf": {"value": -100.0}},
            {"leaf": {"value": 300.0}}
        ]}
    ]
}"#;

fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regression_model.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_load_gradient_boosting() {
    let (_dir, path) = write(BOOSTED);
    let model = RegressionModel::load(&path).unwrap();

    assert_eq!(model.kind(), "gradient_boosting");
    assert_eq!(model.n_features(), 3);

    // score 8.0, reviews 50, ln(3) beds
    let price = model.predict(&[8.0, 50.0, 3.0_f64.ln()]).unwrap();
    assert_relative_eq!(price, 3000.0 + 0.5 * (1200.0 + 300.0));

    let price = model.predict(&[6.0, 10.0, 2.0_f64.ln()]).unwrap();
    assert_relative_eq!(price, 3000.0 + 0.5 * (-400.0 - 100.0));
}

#[test]
fn test_load_linear() {
    let (_dir, path) =
        write(r#"{"kind": "linear", "coefficients": [100.0, 1.0], "intercept": 500.0}"#);
    let model = RegressionModel::load(&path).unwrap();

    assert_eq!(model.kind(), "linear");
    assert_eq!(model.predict(&[8.0, 50.0]).unwrap(), 1350.0);
}

#[test]
fn test_unknown_kind_is_decode_error() {
    let (_dir, path) = write(r#"{"kind": "random_forest", "trees": []}"#);
    let err = RegressionModel::load(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Decode { .. }));
}

#[test]
fn test_structurally_invalid_model() {
    let (_dir, path) = write(
        r#"{
            "kind": "gradient_boosting",
            "n_features": 1,
            "init": 0.0,
            "learning_rate": 0.1,
            "trees": [{"nodes": [
                {"split": {"feature": 5, "threshold": 1.0, "left": 1, "right": 2}},
                {"leaf": {"value": 1.0}},
                {"leaf": {"value": 2.0}}
            ]}]
        }"#,
    );
    let err = RegressionModel::load(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::InvalidModel(_)));
}

#[test]
fn test_missing_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RegressionModel::load(&dir.path().join("regression_model.json")).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
}

#[test]
fn test_serialize_round_trip() {
    let (_dir, path) = write(BOOSTED);
    let model = RegressionModel::load(&path).unwrap();

    let json = serde_json::to_string(&model).unwrap();
    let reloaded: RegressionModel = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, model);
}
