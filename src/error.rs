use thiserror::Error;

/// Errors surfaced while encoding or decoding a second factor auth request
/// for transport inside a URL parameter.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The record could not be rendered as, or parsed from, JSON.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The percent-encoded payload did not decode to valid UTF-8.
    #[error("percent-decoded payload is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
