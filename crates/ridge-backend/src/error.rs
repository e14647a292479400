//! Backend client error types.

use thiserror::Error;

/// Errors that can occur talking to the hosted backend.
///
/// Every failure is terminal for the action that caused it; there is no
/// retry layer here. Callers surface the error and let the user re-trigger
/// the action.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The client was misconfigured (bad base URL, empty key).
    #[error("Backend configuration error: {0}")]
    Config(String),

    /// The request failed in transit or the body could not be read.
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Unexpected backend response: {0}")]
    Decode(String),
}
