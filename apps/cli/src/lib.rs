//! # Invoice Predict
//!
//! Command line front end: collects one invoice, hands it to the
//! [`FeatureAssembler`](invp_pricing::FeatureAssembler) and prints the outcome.
//! Results go to stdout, logs to stderr.

pub mod args;
pub mod handlers;
pub mod settings;
