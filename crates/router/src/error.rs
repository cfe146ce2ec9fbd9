//! Router error types
//!
//! These errors never escape [`crate::AppRouter::fetch`]; they exist so the
//! discovery seam has a typed failure channel that the router can absorb
//! into its fallback policy.

use thiserror::Error;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, Error>;

/// Discovery failure modes.
#[derive(Debug, Error)]
pub enum Error {
    /// Discovery response named no usable server under either key
    #[error("router server unavailable")]
    ServerUnavailable,

    /// HTTP request failed (transport or non-success status)
    #[error("discovery request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Discovery response body did not parse
    #[error("discovery response invalid: {0}")]
    Json(#[from] serde_json::Error),
}
