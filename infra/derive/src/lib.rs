#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the predictor crates.
//!
//! The only macro today is [`macro@invp_error`], which every library crate uses to
//! declare its error enum. Docstring examples are `ignore`d because a
//! proc-macro crate cannot depend on the crates that consume it.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a crate error type.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless already derived.
/// * A companion `<Name>Ext` trait with `.context(..)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for each variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` converts upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant is declared.
/// * A module-private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. A variant carrying a source error must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[invp_derive::invp_error]
/// pub enum StoreError {
///     #[error("Store I/O failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn invp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
