//! Export of batch estimates as CSV or JSON.

use crate::currency::format_inr;
use serde::{Deserialize, Serialize};
use stayprice_encoder::{HotelInput, RoomCategory};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty" | "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            _ => Err(ExportError::InvalidFormat(s.to_string())),
        }
    }
}

/// Outcome of one batch row: the request plus either a price or an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRecord {
    /// District label.
    pub district: String,

    /// Transportation facility label.
    pub transport: String,

    /// Room category label.
    pub room: RoomCategory,

    /// Customer score.
    pub score: f64,

    /// Number of reviews.
    pub reviews: i64,

    /// Number of beds.
    pub beds: i64,

    /// Estimated price, if the request succeeded.
    pub price: Option<f64>,

    /// Estimated price formatted for display.
    pub formatted_price: Option<String>,

    /// Why the request failed, if it did.
    pub error: Option<String>,
}

impl BatchRecord {
    /// Record for a successful estimate.
    pub fn priced(input: &HotelInput, price: f64) -> Self {
        let mut record = Self::from_input(input);
        record.price = Some(price);
        record.formatted_price = Some(format_inr(price));
        record
    }

    /// Record for a failed request.
    pub fn failed(input: &HotelInput, error: impl ToString) -> Self {
        let mut record = Self::from_input(input);
        record.error = Some(error.to_string());
        record
    }

    fn from_input(input: &HotelInput) -> Self {
        Self {
            district: input.district.clone(),
            transport: input.transport.clone(),
            room: input.room,
            score: input.score,
            reviews: input.reviews,
            beds: input.beds,
            price: None,
            formatted_price: None,
            error: None,
        }
    }

    /// Check whether the request succeeded.
    pub const fn is_ok(&self) -> bool {
        self.price.is_some()
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for [BatchRecord] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for record in self {
                    wtr.serialize(record)?;
                }
                let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<BatchRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}
