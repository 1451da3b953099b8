//! Encode-then-predict pipeline.
//!
//! One call to [`PricePredictor::predict`] is one press of "Predict": the
//! request is validated and encoded into a fresh row, the row is handed to
//! the model, and the price comes back. Nothing is cached between calls.

use crate::error::{PredictError, Result};
use stayprice_encoder::{FeatureEncoder, FeatureRow, HotelInput};
use stayprice_model::Predictor;
use std::fmt;
use tracing::debug;

/// A price estimate and the row it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<'a> {
    /// Estimated price in rupees
    pub price: f64,
    /// Model input row
    pub row: FeatureRow<'a>,
}

/// Turns hotel attributes into a price.
pub struct PricePredictor<'a> {
    encoder: FeatureEncoder<'a>,
    model: &'a dyn Predictor,
}

impl<'a> PricePredictor<'a> {
    /// Pair an encoder with a model trained on the same schema.
    ///
    /// # Errors
    /// Returns [`PredictError::SchemaMismatch`] if the model expects a
    /// different number of features than the encoder's schema has.
    pub fn new(encoder: FeatureEncoder<'a>, model: &'a dyn Predictor) -> Result<Self> {
        let schema = encoder.schema().len();
        if model.n_features() != schema {
            return Err(PredictError::SchemaMismatch {
                schema,
                model: model.n_features(),
            });
        }
        Ok(Self { encoder, model })
    }

    /// Encoder in use.
    pub const fn encoder(&self) -> &FeatureEncoder<'a> {
        &self.encoder
    }

    /// Estimate the price for one request.
    ///
    /// # Errors
    /// Returns an error if the request is invalid or names an unknown
    /// category, or if the model fails to produce a finite value.
    pub fn predict(&self, input: &HotelInput) -> Result<Prediction<'a>> {
        let row = self.encoder.encode(input)?;
        let price = self.model.predict(row.values())?;

        debug!(
            district = %input.district,
            transport = %input.transport,
            room = %input.room,
            price,
            "predicted price"
        );
        Ok(Prediction { price, row })
    }
}

impl fmt::Debug for PricePredictor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricePredictor")
            .field("encoder", &self.encoder)
            .field("n_features", &self.model.n_features())
            .finish()
    }
}
