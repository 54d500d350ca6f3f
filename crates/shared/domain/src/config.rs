use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level predictor configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub model: ModelConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl From<AppConfigInner> for AppConfig {
    fn from(inner: AppConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// Where the trained model artifact lives and how it is encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
    pub format: ArtifactFormat,
}

/// Encoding of the model artifact on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Pick by file extension: `.json` is JSON, anything else postcard.
    #[default]
    Auto,
    Json,
    Postcard,
}

/// How results are shown to the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

/// Logger settings applied by the binary at start-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ModelConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("invoice_model.json"), format: ArtifactFormat::Auto }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { currency_symbol: "₹".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
