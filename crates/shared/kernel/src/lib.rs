//! Kernel utilities shared by the predictor binaries.
//! Keep this crate lightweight: it wires configuration sources together and
//! re-exports the domain so applications need a single import.
//!
//! ## Config loading
//! ```rust,no_run
//! use invp_kernel::config::load_config;
//! use invp_kernel::domain::config::AppConfigInner;
//!
//! let cfg: AppConfigInner = load_config(Some("predictor.toml")).unwrap();
//! println!("{}", cfg.model.path.display());
//! ```

pub mod config;

pub use invp_domain as domain;
