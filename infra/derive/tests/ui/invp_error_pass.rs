use invp_derive::invp_error;
use std::borrow::Cow;

#[invp_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {reason}", format_context(.context))]
    Rejected { reason: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_io: DemoError = std::io::Error::other("disk").into();
    assert!(matches!(from_io, DemoError::Io { context: None, .. }));

    let from_str: DemoError = "boom".into();
    assert_eq!(from_str.to_string(), "Internal error: boom");

    let from_string: DemoError = String::from("owned").into();
    assert!(matches!(from_string, DemoError::Internal { .. }));
}
