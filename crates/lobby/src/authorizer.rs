//! Session authorizer capability
//!
//! The lobby never negotiates authorization itself; it consumes the result
//! through this trait. The concrete authorizer (which may resolve the app
//! router internally, cache tokens, and carry credentials and feature
//! flags) lives outside this crate.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// A short-lived grant against a resolved game server.
///
/// Revalidated on every lobby call; the lobby itself never caches one.
#[derive(Debug, Clone, Deserialize)]
pub struct Authorization {
    /// Base URL of the server lobby requests go to
    pub url: String,
    /// Token attached under the session header
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Capability to obtain a session authorization.
#[async_trait]
pub trait SessionAuthorizer: Send + Sync {
    /// Negotiate (or return a still-valid) `(url, session_token)` pair.
    ///
    /// Failures propagate unchanged to the caller of the lobby operation;
    /// the lobby applies no retry.
    async fn authorize(&self) -> Result<Authorization>;
}
