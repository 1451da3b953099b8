//! Report generation for a single price estimate.

use crate::currency::format_inr;
use serde::{Deserialize, Serialize};
use stayprice_encoder::HotelInput;

/// Title shown above every estimate.
pub const TITLE: &str = "Delhi Smart Hotel Price Estimator for a Week";

/// One column of the row the model saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    /// Column name
    pub column: String,
    /// Encoded value
    pub value: f64,
}

/// A price estimate ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Request that produced the estimate
    pub input: HotelInput,

    /// Estimated price in rupees
    pub price: f64,

    /// Estimated price formatted for display
    pub formatted_price: String,

    /// Model family that produced the estimate
    pub model_kind: String,

    /// Encoded feature row, if requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub features: Option<Vec<FeatureValue>>,
}

impl PredictionReport {
    /// Create a report for an estimate.
    pub fn new(input: HotelInput, price: f64, model_kind: impl Into<String>) -> Self {
        Self {
            input,
            price,
            formatted_price: format_inr(price),
            model_kind: model_kind.into(),
            features: None,
        }
    }

    /// Attach the encoded feature row.
    pub fn with_features<'a>(mut self, features: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        self.features = Some(
            features
                .into_iter()
                .map(|(column, value)| FeatureValue {
                    column: column.to_string(),
                    value,
                })
                .collect(),
        );
        self
    }

    /// Notes explaining where the number comes from.
    pub fn notes(&self) -> Vec<&'static str> {
        let model_note = match self.model_kind.as_str() {
            "gradient_boosting" => "Uses Gradient Boosting (no feature scaling)",
            "linear" => "Uses linear regression",
            _ => "Uses a regression model trained offline",
        };

        vec![
            model_note,
            "Trained on scraped Delhi hotel listings",
            "Log-transformed bed counts",
            "District & transport encoded from training data",
        ]
    }

    /// Render as human-readable text.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(TITLE);
        output.push('\n');
        output.push_str(&"=".repeat(TITLE.chars().count()));
        output.push_str("\n\n");

        output.push_str(&format!("  District:        {}\n", self.input.district));
        output.push_str(&format!("  Transportation:  {}\n", self.input.transport));
        output.push_str(&format!("  Room Category:   {}\n", self.input.room));
        output.push_str(&format!("  Customer Score:  {:.1}\n", self.input.score));
        output.push_str(&format!("  Reviews:         {}\n", self.input.reviews));
        output.push_str(&format!("  Beds:            {}\n", self.input.beds));

        output.push_str(&format!(
            "\nEstimated Price (₹): {}\n",
            self.formatted_price
        ));

        output.push_str("\nHow this prediction works\n");
        for note in self.notes() {
            output.push_str(&format!("  - {note}\n"));
        }

        if let Some(features) = &self.features {
            output.push_str(&format!("\nModel input ({} columns):\n", features.len()));
            for feature in features {
                output.push_str(&format!(
                    "  {:<28} {:>12.4}\n",
                    feature.column, feature.value
                ));
            }
        }

        output
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
