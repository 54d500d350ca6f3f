//! # Invoice Pricing
//!
//! Turns one invoice submission into a predicted total price.
//!
//! ## Flow
//!
//! 1.  **Catalog ([`catalog`]):** the selectable country labels, derived from
//!     the schema's country columns.
//! 2.  **Assembly ([`assembler`]):** typed inputs become a positional
//!     [`FeatureRecord`](invp_domain::FeatureRecord), are checked for zero
//!     amounts, and are handed to the model.
//! 3.  **Model ([`model`]):** the [`PriceModel`] seam and the [`LinearModel`]
//!     artifact loaded once at start-up by [`load_model`].
//!
//! Validation and prediction failures come back as an [`Outcome`] to display;
//! artifact problems surface as [`PricingError`] for the entry point to handle.

pub mod assembler;
pub mod catalog;
mod error;
mod format;
pub mod model;

pub use crate::assembler::{FeatureAssembler, NON_ZERO_WARNING, Outcome, Prediction, Severity};
pub use crate::catalog::CountryCatalog;
pub use crate::error::{PricingError, PricingErrorExt};
pub use crate::format::format_price;
pub use crate::model::{Encoding, LinearModel, ModelFailure, PriceModel, load_model};
