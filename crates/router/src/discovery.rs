//! Router discovery seam
//!
//! [`Discovery`] is the trait boundary between cache/fallback policy and
//! the wire: the [`AppRouter`](crate::AppRouter) only ever sees a
//! [`RouteInfo`] or an error. [`HttpDiscovery`] is the production
//! implementation against the hosted discovery endpoint; tests substitute
//! stubs.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default discovery endpoint for the hosted backend.
pub const DISCOVERY_URL: &str = "https://app-router.leancloud.cn/2/route";

/// Decoded discovery response.
///
/// Field names follow the wire format. The server may name the preferred
/// host under either key; `multiplayer_router_server` takes precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteInfo {
    /// Seconds the resolved server stays valid
    pub ttl: u64,
    /// Secondary server key
    #[serde(default)]
    pub play_server: Option<String>,
    /// Primary server key, preferred over `play_server`
    #[serde(default)]
    pub multiplayer_router_server: Option<String>,
}

impl RouteInfo {
    /// Preferred server hostname: primary key over secondary key.
    pub fn preferred_server(&self) -> Option<&str> {
        self.multiplayer_router_server
            .as_deref()
            .or(self.play_server.as_deref())
    }
}

/// Capability to resolve an application's router server.
#[async_trait]
pub trait Discovery: Send + Sync {
    /// Look up the route for `app_id`.
    async fn resolve(&self, app_id: &str) -> Result<RouteInfo>;
}

/// HTTP discovery against the hosted endpoint.
pub struct HttpDiscovery {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpDiscovery {
    /// Create a discovery client against [`DISCOVERY_URL`].
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DISCOVERY_URL)
    }

    /// Create a discovery client against a custom endpoint (private
    /// tenants, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl Discovery for HttpDiscovery {
    async fn resolve(&self, app_id: &str) -> Result<RouteInfo> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("appId", app_id)])
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        tracing::debug!(%text, "discovery response");
        let info: RouteInfo = serde_json::from_str(&text)?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_preferred() {
        let info: RouteInfo = serde_json::from_str(
            r#"{"ttl":60,"play_server":"s.example.com","multiplayer_router_server":"p.example.com"}"#,
        )
        .unwrap();
        assert_eq!(info.preferred_server(), Some("p.example.com"));
    }

    #[test]
    fn test_secondary_key_alone() {
        let info: RouteInfo =
            serde_json::from_str(r#"{"ttl":60,"play_server":"s.example.com"}"#).unwrap();
        assert_eq!(info.preferred_server(), Some("s.example.com"));
    }

    #[test]
    fn test_no_server_keys() {
        let info: RouteInfo = serde_json::from_str(r#"{"ttl":60}"#).unwrap();
        assert_eq!(info.preferred_server(), None);
    }

    #[test]
    fn test_missing_ttl_is_an_error() {
        assert!(serde_json::from_str::<RouteInfo>(r#"{"play_server":"s"}"#).is_err());
    }
}
