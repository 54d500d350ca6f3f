//! The prediction collaborator and the artifact format it is loaded from.

use crate::error::{PricingError, PricingErrorExt};
use invp_domain::config::{ArtifactFormat, ModelConfig};
use invp_domain::{FEATURE_COLUMNS, FeatureRecord};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Opaque failure raised by a model's `predict`. Only its message is surfaced.
pub type ModelFailure = Box<dyn std::error::Error + Send + Sync>;

/// A trained regressor. Loaded once, shared read-only across requests.
pub trait PriceModel: Debug + Send + Sync {
    /// Predicts one value per record, in input order.
    ///
    /// # Errors
    /// Any failure the model reports; callers treat it opaquely.
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, ModelFailure>;
}

/// Concrete on-disk encoding of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Postcard,
}

impl Encoding {
    /// Resolves [`ArtifactFormat::Auto`] by extension: `.json` is JSON, anything else postcard.
    #[must_use]
    pub fn resolve(format: ArtifactFormat, path: &Path) -> Self {
        match format {
            ArtifactFormat::Json => Self::Json,
            ArtifactFormat::Postcard => Self::Postcard,
            ArtifactFormat::Auto => {
                if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                    Self::Json
                } else {
                    Self::Postcard
                }
            }
        }
    }
}

/// Linear regression artifact: `intercept + Σ coefficient[i] * feature[i]`.
///
/// `feature_names` is the column order the model was fitted on. A record whose
/// columns differ, in name or position, is refused at predict time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearModel {
    pub name: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// # Errors
    /// [`PricingError::InvalidArtifact`], see [`LinearModel::validate`].
    pub fn new(
        name: impl Into<String>,
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, PricingError> {
        let model = Self { name: name.into(), feature_names, coefficients, intercept };
        model.validate()?;
        Ok(model)
    }

    /// Builds a model over the current schema. Columns not listed get a zero weight.
    ///
    /// # Errors
    /// [`PricingError::InvalidArtifact`] if a weight names a column outside the schema
    /// or any number is not finite.
    pub fn for_schema(
        name: impl Into<String>,
        intercept: f64,
        weights: &[(&str, f64)],
    ) -> Result<Self, PricingError> {
        let unknown = weights.iter().find(|(c, _)| !FEATURE_COLUMNS.iter().any(|column| column == c));
        if let Some((column, _)) = unknown {
            return Err(PricingError::InvalidArtifact {
                message: format!("weight for unknown column '{column}'").into(),
                context: None,
            });
        }

        let coefficients = FEATURE_COLUMNS
            .iter()
            .map(|column| weights.iter().find(|(c, _)| c == column).map_or(0.0, |(_, w)| *w))
            .collect();

        Self::new(
            name,
            FEATURE_COLUMNS.iter().map(|c| (*c).to_owned()).collect(),
            coefficients,
            intercept,
        )
    }

    /// Checks internal consistency of a decoded artifact.
    ///
    /// # Errors
    /// [`PricingError::InvalidArtifact`] on length mismatch, no features, or non-finite numbers.
    pub fn validate(&self) -> Result<(), PricingError> {
        let invalid = |message: String| PricingError::InvalidArtifact {
            message: message.into(),
            context: Some(self.name.clone().into()),
        };

        if self.feature_names.is_empty() {
            return Err(invalid("no feature names".to_owned()));
        }
        if self.feature_names.len() != self.coefficients.len() {
            return Err(invalid(format!(
                "{} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        if let Some(i) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(invalid(format!(
                "coefficient for '{}' is not finite",
                self.feature_names[i]
            )));
        }
        if !self.intercept.is_finite() {
            return Err(invalid("intercept is not finite".to_owned()));
        }
        Ok(())
    }

    /// Decodes and validates an artifact.
    ///
    /// # Errors
    /// Decoding errors, or [`PricingError::InvalidArtifact`] from [`LinearModel::validate`].
    pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<Self, PricingError> {
        let model: Self = match encoding {
            Encoding::Json => serde_json::from_slice(bytes)?,
            Encoding::Postcard => postcard::from_bytes(bytes)?,
        };
        model.validate()?;
        Ok(model)
    }

    /// # Errors
    /// Serialization failures of the chosen encoding.
    pub fn to_bytes(&self, encoding: Encoding) -> Result<Vec<u8>, PricingError> {
        match encoding {
            Encoding::Json => Ok(serde_json::to_vec_pretty(self)?),
            Encoding::Postcard => Ok(postcard::to_stdvec(self)?),
        }
    }

    /// Reads an artifact from disk.
    ///
    /// # Errors
    /// [`PricingError::ArtifactIo`] if the file is missing or unreadable, otherwise as
    /// [`LinearModel::from_bytes`].
    pub fn load(path: &Path, format: ArtifactFormat) -> Result<Self, PricingError> {
        let bytes = fs::read(path).context(path.display().to_string())?;
        Self::from_bytes(&bytes, Encoding::resolve(format, path))
            .context(path.display().to_string())
    }

    /// Writes the artifact to disk.
    ///
    /// # Errors
    /// Serialization or I/O failures.
    pub fn save(&self, path: &Path, format: ArtifactFormat) -> Result<(), PricingError> {
        let bytes = self.to_bytes(Encoding::resolve(format, path))?;
        fs::write(path, bytes).context(path.display().to_string())
    }

    fn check_columns(&self, record: &FeatureRecord) -> Result<(), ModelFailure> {
        if self.feature_names.len() != record.len() {
            return Err(format!(
                "record has {} features, but the model was trained with {} features",
                record.len(),
                self.feature_names.len()
            )
            .into());
        }

        let mismatch = self
            .feature_names
            .iter()
            .zip(record.columns())
            .enumerate()
            .find(|(_, (expected, got))| expected.as_str() != **got);

        match mismatch {
            Some((i, (expected, got))) => Err(format!(
                "feature names must match those seen at fit time: column {i} is '{got}', expected '{expected}'"
            )
            .into()),
            None => Ok(()),
        }
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, records: &[FeatureRecord]) -> Result<Vec<f64>, ModelFailure> {
        records
            .iter()
            .map(|record| {
                self.check_columns(record)?;
                let price = self.intercept
                    + self.coefficients.iter().zip(record.values()).map(|(c, v)| c * v).sum::<f64>();
                if price.is_finite() {
                    Ok(price)
                } else {
                    Err("prediction is not a finite number".into())
                }
            })
            .collect()
    }
}

/// Loads the configured artifact once, for the whole process.
///
/// A column layout that differs from the current schema is logged but not
/// refused here; every prediction against it will fail instead.
///
/// # Errors
/// See [`LinearModel::load`].
#[instrument(skip_all, fields(path = %config.path.display()))]
pub fn load_model(config: &ModelConfig) -> Result<Arc<dyn PriceModel>, PricingError> {
    let model = LinearModel::load(&config.path, config.format)?;

    if !model.feature_names.iter().map(String::as_str).eq(FEATURE_COLUMNS) {
        warn!(
            name = %model.name,
            features = model.feature_names.len(),
            "Model columns differ from the feature schema; predictions will be refused"
        );
    }

    info!(name = %model.name, features = model.feature_names.len(), "Model loaded");
    Ok(Arc::new(model))
}
