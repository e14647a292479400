//! AI adapter error types.

use thiserror::Error;

/// Errors from the product-analysis adapter.
#[derive(Error, Debug)]
pub enum AiError {
    /// The adapter was misconfigured (bad endpoint, empty key).
    #[error("AI configuration error: {0}")]
    Config(String),

    /// The request failed in transit.
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The inference endpoint answered with a non-success status.
    #[error("AI endpoint returned {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Unexpected AI response: {0}")]
    Decode(String),
}
