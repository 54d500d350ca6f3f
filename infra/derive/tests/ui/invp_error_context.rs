use invp_derive::invp_error;
use std::borrow::Cow;

#[invp_error]
pub enum LookupError {
    #[error("Parse failed{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing entry{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, LookupError> {
    raw.parse::<i64>().context("parsing id")
}

fn find(key: &str) -> Result<i64, LookupError> {
    Err::<i64, _>(LookupError::Missing { key: key.to_owned(), context: None }).context("catalog")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse failed (parsing id): "));

    let err = find("k").unwrap_err();
    assert_eq!(err.to_string(), "Missing entry (catalog): k");

    assert_eq!(parse("42").unwrap(), 42);
}
