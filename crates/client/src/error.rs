//! Gateway error types.

use thiserror::Error;

/// Failures surfaced by the gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the credential (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The server answered with a non-2xx status.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the error body.
        message: String,
    },

    /// A call that requires a session was made without one.
    #[error("not logged in")]
    NoSession,

    /// Transport-level failure (connection, timeout, malformed body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
