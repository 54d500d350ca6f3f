//! Assemble, validate, predict.

use crate::error::PricingError;
use crate::format::format_price;
use crate::model::PriceModel;
use invp_domain::{FeatureRecord, InvoiceFeatures};
use std::borrow::Cow;
use std::slice;
use std::sync::Arc;
use strum_macros::Display;
use tracing::{debug, error, info, warn};

/// Shown when a required amount is zero.
pub const NON_ZERO_WARNING: &str =
    "Please enter valid non-zero values for quantity, price, and totals.";

/// A successful prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub price: f64,
}

impl Prediction {
    #[must_use]
    pub fn formatted(&self, symbol: &str) -> String {
        format_price(self.price, symbol)
    }
}

/// Turns invoice inputs into model records and asks the injected model for a price.
///
/// Holds no per-request state; one instance serves every submission.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    model: Arc<dyn PriceModel>,
}

impl FeatureAssembler {
    #[must_use]
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self { model }
    }

    /// Positional record for the model. Never fails: the record length is fixed by type.
    #[must_use]
    pub fn assemble(features: &InvoiceFeatures) -> FeatureRecord {
        let record = features.to_record();
        debug!(country = %features.country, "Feature record assembled");
        record
    }

    /// Rejects submissions with a zero quantity, unit price or total quantity.
    ///
    /// # Errors
    /// [`PricingError::Validation`] listing every zero field.
    pub fn validate(features: &InvoiceFeatures) -> Result<(), PricingError> {
        let zero_fields = features.amounts.zero_fields();
        if zero_fields.is_empty() {
            return Ok(());
        }
        Err(PricingError::Validation {
            message: Cow::Borrowed(NON_ZERO_WARNING),
            zero_fields,
            context: None,
        })
    }

    /// Runs the whole sequence. The model is not called when validation fails.
    ///
    /// # Errors
    /// [`PricingError::Validation`] or [`PricingError::Prediction`].
    pub fn predict(&self, features: &InvoiceFeatures) -> Result<Prediction, PricingError> {
        let record = Self::assemble(features);
        Self::validate(features)?;

        let outputs = self
            .model
            .predict(slice::from_ref(&record))
            .map_err(|err| PricingError::Prediction { message: err.to_string(), context: None })?;

        let price = outputs.first().copied().ok_or_else(|| PricingError::Prediction {
            message: "model returned no predictions".to_owned(),
            context: None,
        })?;

        Ok(Prediction { price })
    }

    /// Like [`FeatureAssembler::predict`], with the recoverable failures folded
    /// into an [`Outcome`] for display.
    pub fn submit(&self, features: &InvoiceFeatures) -> Outcome {
        match self.predict(features) {
            Ok(prediction) => {
                info!(price = prediction.price, "Price predicted");
                Outcome::Predicted(prediction)
            }
            Err(PricingError::Validation { message, zero_fields, .. }) => {
                warn!(fields = ?zero_fields, "Submission rejected");
                Outcome::Rejected { message, zero_fields }
            }
            Err(err) => {
                error!(error = %err, "Prediction failed");
                Outcome::Failed { message: err.to_string() }
            }
        }
    }
}

/// How an outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Result of one submission, ready to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predicted(Prediction),
    Rejected { message: Cow<'static, str>, zero_fields: Vec<&'static str> },
    /// `message` already reads `Prediction failed: ...`.
    Failed { message: String },
}

impl Outcome {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Predicted(_) => Severity::Success,
            Self::Rejected { .. } => Severity::Warning,
            Self::Failed { .. } => Severity::Error,
        }
    }

    #[must_use]
    pub fn render(&self, symbol: &str) -> String {
        match self {
            Self::Predicted(prediction) => {
                format!("💰 Predicted Total Invoice Price: {}", prediction.formatted(symbol))
            }
            Self::Rejected { message, .. } => message.to_string(),
            Self::Failed { message } => message.clone(),
        }
    }
}
