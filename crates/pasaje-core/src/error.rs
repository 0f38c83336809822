//! Error Types

use thiserror::Error;

/// Result type alias for chat service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failures the chat service boundary can produce.
///
/// The widget collapses every variant into the same fallback turn; the
/// variants exist so implementations can log something sharper than
/// "request failed".
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport-level failure (connection refused, DNS, aborted fetch)
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("chat service returned status {code}: {detail}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Server-supplied error text, or the canonical status reason
        detail: String,
    },

    /// Response body did not match the expected shape
    #[error("malformed chat response: {0}")]
    Decode(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Other(err.to_string())
    }
}
