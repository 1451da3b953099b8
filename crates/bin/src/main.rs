//! stayprice CLI binary.
//!
//! Command-line front end for the Delhi hotel price estimator.

mod commands;

use clap::{Parser, Subcommand};
use commands::{batch, inspect, logging};
use stayprice::encoder::input::{DEFAULT_BEDS, DEFAULT_REVIEWS, DEFAULT_SCORE};
use stayprice::encoder::{HotelInput, RoomCategory};
use stayprice::output::PredictionReport;
use stayprice::{AppConfig, ArtifactStore};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "stayprice")]
#[command(about = "Delhi Smart Hotel Price Estimator for a Week", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing regression_model.json, features.json and label_encoders.json
    #[arg(long, global = true)]
    artifacts: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of one hotel
    Predict {
        /// District (see `stayprice options`)
        #[arg(long)]
        district: String,

        /// Transportation facility (see `stayprice options`)
        #[arg(long)]
        transport: String,

        /// Room category, e.g. "Suite/Luxury" or "suite"
        #[arg(long)]
        room: RoomCategory,

        /// Customer score (0.0 to 10.0)
        #[arg(long, default_value_t = DEFAULT_SCORE, allow_negative_numbers = true)]
        score: f64,

        /// Number of reviews
        #[arg(long, default_value_t = DEFAULT_REVIEWS, allow_negative_numbers = true)]
        reviews: i64,

        /// Number of beds
        #[arg(long, default_value_t = DEFAULT_BEDS, allow_negative_numbers = true)]
        beds: i64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Include the encoded model input
        #[arg(long)]
        show_features: bool,
    },

    /// List the districts, transport options and room categories accepted
    Options {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the model's feature schema in order
    Schema,

    /// Estimate prices for every hotel in a CSV file
    Batch {
        /// CSV with columns district,transport,room[,score,reviews,beds]
        #[arg(long)]
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format (csv, json or pretty); inferred from --output when omitted
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let paths = config.artifact_paths(cli.artifacts.as_deref());
    let store = ArtifactStore::load(&paths).map_err(|e| {
        format!(
            "Failed to load artifacts from {}: {}",
            paths.model.display(),
            e
        )
    })?;

    match cli.command {
        Commands::Predict {
            district,
            transport,
            room,
            score,
            reviews,
            beds,
            format,
            show_features,
        } => {
            let input = HotelInput::new(district, transport, room)
                .with_score(score)
                .with_reviews(reviews)
                .with_beds(beds);
            predict(&store, &config, input, &format, show_features)?;
        }
        Commands::Options { format } => {
            inspect::print_options(&store, is_json(&format)?)?;
        }
        Commands::Schema => {
            inspect::print_schema(&store);
        }
        Commands::Batch {
            input,
            output,
            format,
        } => {
            run_batch(&store, &config, &input, output.as_deref(), format.as_deref())?;
        }
    }

    Ok(())
}

fn predict(
    store: &ArtifactStore,
    config: &AppConfig,
    input: HotelInput,
    format: &str,
    show_features: bool,
) -> Result<(), Box<dyn Error>> {
    let rendered = render_prediction(store, config, input, format, show_features)?;
    print!("{}", rendered);
    Ok(())
}

fn render_prediction(
    store: &ArtifactStore,
    config: &AppConfig,
    input: HotelInput,
    format: &str,
    show_features: bool,
) -> Result<String, Box<dyn Error>> {
    let json = is_json(format)?;
    let predictor = store.predictor(config.defaults)?;

    let prediction = predictor.predict(&input).map_err(|e| {
        if e.is_request_error() {
            warn!(error = %e, "request rejected");
        }
        e
    })?;

    let mut report = PredictionReport::new(input, prediction.price, store.model().kind());
    if show_features {
        report = report.with_features(prediction.row.iter());
    }

    if json {
        Ok(format!("{}\n", report.to_json()?))
    } else {
        Ok(report.to_text())
    }
}

fn run_batch(
    store: &ArtifactStore,
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    format: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let format = batch::resolve_format(format, output)?;

    let predictor = store.predictor(config.defaults)?;
    let reader = csv::Reader::from_path(input)?;
    let outcome = batch::score(&predictor, reader);

    info!(
        scored = outcome.scored(),
        failed = outcome.failed(),
        unreadable = outcome.unreadable,
        "batch complete"
    );

    batch::write(&outcome.records, output, format)?;
    eprintln!(
        "Scored {} of {} hotels ({} rejected, {} unreadable rows)",
        outcome.scored(),
        outcome.records.len() + outcome.unreadable,
        outcome.failed(),
        outcome.unreadable
    );

    Ok(())
}

fn is_json(format: &str) -> Result<bool, Box<dyn Error>> {
    match format.to_lowercase().as_str() {
        "json" => Ok(true),
        "text" => Ok(false),
        _ => Err(format!("Unknown output format: {} (expected text or json)", format).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> ArtifactStore {
        fixtures::store()
    }

    fn suite() -> HotelInput {
        HotelInput::new("South Delhi", "Metro", RoomCategory::Suite)
    }

    #[rstest]
    #[case("json", true)]
    #[case("JSON", true)]
    #[case("text", false)]
    #[case("Text", false)]
    fn test_is_json(#[case] format: &str, #[case] expected: bool) {
        assert_eq!(is_json(format).unwrap(), expected);
    }

    #[rstest]
    #[case("xml")]
    #[case("csv")]
    #[case("")]
    fn test_is_json_rejects_other_formats(#[case] format: &str) {
        let err = is_json(format).unwrap_err();
        assert!(err.to_string().contains("expected text or json"));
    }

    #[rstest]
    fn test_render_text(store: ArtifactStore) {
        let config = AppConfig::default();
        let text = render_prediction(&store, &config, suite(), "text", false).unwrap();

        assert!(text.contains("Estimated Price (₹): ₹8,100"));
        assert!(!text.contains("Model input"));
    }

    #[rstest]
    fn test_render_json_with_features(store: ArtifactStore) {
        let config = AppConfig::default();
        let json = render_prediction(&store, &config, suite(), "json", true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["price"], 8100.0);
        assert_eq!(value["formatted_price"], "₹8,100");
        assert_eq!(value["features"].as_array().unwrap().len(), 5);
    }

    #[rstest]
    fn test_render_rejects_format_before_predicting(store: ArtifactStore) {
        let input = HotelInput::new("Noida", "Metro", RoomCategory::Suite);
        let config = AppConfig::default();
        let err = render_prediction(&store, &config, input, "yaml", false).unwrap_err();

        assert!(err.to_string().contains("Unknown output format: yaml"));
    }

    #[rstest]
    fn test_render_rejects_unknown_district(store: ArtifactStore) {
        let input = HotelInput::new("Noida", "Metro", RoomCategory::Suite);
        let config = AppConfig::default();
        let err = render_prediction(&store, &config, input, "text", false).unwrap_err();

        assert!(err.to_string().contains("Noida"));
    }

    #[rstest]
    fn test_batch_infers_json_from_output_path(store: ArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hotels.csv");
        let output = dir.path().join("prices.json");
        std::fs::write(
            &input,
            "district,transport,room,score\nSouth Delhi,Metro,suite,9.0\nNoida,Metro,dorm,\n",
        )
        .unwrap();

        let config = AppConfig::default();
        run_batch(&store, &config, &input, Some(&output), None).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["room"], "Suite/Luxury");
        assert_eq!(records[0]["price"], 9100.0);
        assert!(records[1]["price"].is_null());
    }

    #[rstest]
    fn test_batch_explicit_format_overrides_extension(store: ArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hotels.csv");
        let output = dir.path().join("prices.json");
        std::fs::write(&input, "district,transport,room\nNew Delhi,Metro,Dormitory\n").unwrap();

        let config = AppConfig::default();
        run_batch(&store, &config, &input, Some(&output), Some("csv")).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("district,"));
    }

    #[rstest]
    fn test_batch_rejects_unknown_format(store: ArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hotels.csv");
        let output = dir.path().join("prices.out");
        std::fs::write(&input, "district,transport,room\nNew Delhi,Metro,Dormitory\n").unwrap();

        let config = AppConfig::default();
        let err = run_batch(&store, &config, &input, Some(&output), Some("xml")).unwrap_err();

        assert!(err.to_string().contains("xml"));
        assert!(!output.exists());
    }
}
