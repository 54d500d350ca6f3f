//! Command handlers. Each writes its result to the given writer.

pub mod inspect;
pub mod predict;
