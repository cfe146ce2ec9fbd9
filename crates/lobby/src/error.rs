//! Lobby error types

use multiplay_core::PlayError;
use thiserror::Error;

/// Result type alias for lobby operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lobby failure modes.
///
/// Exactly one mapping pass runs per operation: a non-success response
/// whose body decodes as a backend error document becomes [`Error::Play`];
/// one that does not becomes [`Error::Status`]; transport failures stay
/// [`Error::Http`] untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Structured backend failure
    #[error(transparent)]
    Play(#[from] PlayError),

    /// Non-success HTTP response without a structured backend body
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport failure, propagated as-is
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Success response body failed to decode
    #[error("response invalid: {0}")]
    Json(#[from] serde_json::Error),

    /// Argument rejected before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Session authorizer failure
    #[error("authorize failed: {0}")]
    Authorize(String),
}

impl Error {
    /// Backend reason code, when the failure carries one.
    pub fn reason_code(&self) -> Option<i32> {
        match self {
            Error::Play(err) => Some(err.reason_code),
            _ => None,
        }
    }
}
