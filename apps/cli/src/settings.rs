//! Start-up wiring: configuration layering and logger installation.

use crate::args::Cli;
use anyhow::{Context, Result};
use invp_kernel::config::{ConfigError, load_config};
use invp_kernel::domain::config::{AppConfig, AppConfigInner, LoggingConfig};
use invp_logger::{LevelFilter, Logger};

/// Name used for the logger and its rolling files.
pub const APP_NAME: &str = "invoice-predict";

/// Configuration file and environment, with `--model` applied on top.
///
/// # Errors
/// See [`load_config`].
pub fn load(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut cfg: AppConfig = load_config::<AppConfigInner>(cli.config.as_deref())?.into();
    if let Some(model) = &cli.model {
        cfg.model.path.clone_from(model);
    }
    Ok(cfg)
}

/// Installs the global subscriber described by `logging`. `verbose` forces debug level.
///
/// # Errors
/// An unknown level name, or any [`invp_logger::LoggerError`].
pub fn init_logger(logging: &LoggingConfig, verbose: bool) -> Result<Logger> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        logging
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", logging.level))?
    };

    let builder = Logger::builder().name(APP_NAME).level(level);
    let builder = match &logging.filter {
        Some(filter) => builder.env_filter(filter.as_str()),
        None => builder,
    };

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).json(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
