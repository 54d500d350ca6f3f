use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
/// Any extension the `config` crate understands is accepted (`predictor.toml`, ...).
pub const DEFAULT_CONFIG: &str = "predictor";

/// Prefix of environment overrides (`INVP__MODEL__PATH` sets `model.path`).
pub const ENV_PREFIX: &str = "INVP";

#[invp_derive::invp_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file, overlaid by `INVP__`-prefixed environment variables.
///
/// 1. **File**: `path` when given, and then it must exist. Otherwise
///    [`DEFAULT_CONFIG`] in the working directory, which may be absent.
/// 2. **Environment**: nested keys separated by double underscores
///    (`INVP__DISPLAY__CURRENCY_SYMBOL` maps to `display.currency_symbol`).
///
/// # Errors
/// * An explicit `path` that does not exist.
/// * File contents or environment values that do not fit `T`.
///
/// # Example
/// ```rust
/// use invp_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     threshold: f64,
/// }
///
/// let cfg: Settings = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
