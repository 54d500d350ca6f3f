//! # Domain Models
//!
//! Pure data for the invoice price predictor: the feature schema, the typed
//! invoice inputs, the positional [`FeatureRecord`], and configuration.
//! No I/O and no model logic live here.

pub mod config;
pub mod invoice;
pub mod record;
pub mod schema;

pub use crate::invoice::{InvoiceAmounts, InvoiceFeatures, InvoiceTiming};
pub use crate::record::FeatureRecord;
pub use crate::schema::{Country, FEATURE_COLUMNS, FEATURE_COUNT};
