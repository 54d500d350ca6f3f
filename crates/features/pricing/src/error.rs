use std::borrow::Cow;

/// Error types of the pricing feature.
#[invp_derive::invp_error]
pub enum PricingError {
    /// The model artifact could not be read from disk.
    #[error("Model artifact unreadable{}: {source}", format_context(.context))]
    ArtifactIo { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Model artifact is not valid JSON{}: {source}", format_context(.context))]
    ArtifactJson { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Model artifact is not valid postcard{}: {source}", format_context(.context))]
    ArtifactPostcard { source: postcard::Error, context: Option<Cow<'static, str>> },

    /// The artifact decoded but its contents are inconsistent.
    #[error("Model artifact is invalid{}: {message}", format_context(.context))]
    InvalidArtifact { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown country{}: '{label}'", format_context(.context))]
    UnknownCountry { label: String, context: Option<Cow<'static, str>> },

    #[error("Unknown country column{}: '{column}'", format_context(.context))]
    UnknownColumn { column: String, context: Option<Cow<'static, str>> },

    /// Required amounts are zero. The message is shown to the user as is.
    #[error("{message}")]
    Validation {
        message: Cow<'static, str>,
        zero_fields: Vec<&'static str>,
        context: Option<Cow<'static, str>>,
    },

    /// The model rejected the record; `message` is the model's own description.
    #[error("Prediction failed{}: {message}", format_context(.context))]
    Prediction { message: String, context: Option<Cow<'static, str>> },
}
