//! App router: override, cache, resolve, fall back
//!
//! Owns the cached route and the policy around it. The cache is guarded by
//! a mutex held only across reads and writes, never across an await, so
//! concurrent `fetch` calls over an expired window may each trigger their
//! own discovery request; the last completion wins the cache write. That
//! race is inherited behavior, kept for simplicity (see DESIGN.md).

use crate::discovery::Discovery;
use crate::fallback::fallback_router_url;
use multiplay_core::{ClientConfig, Clock};
use std::sync::{Arc, Mutex};

/// Grace window cached after a discovery failure, in seconds. Long on
/// purpose: the fallback address is stable, and repeated failures must not
/// hammer the discovery service.
const FALLBACK_TTL_SECS: u64 = 10_800;

/// Path appended to a resolved or overridden server to reach the
/// authorize endpoint.
const AUTHORIZE_PATH: &str = "/1/multiplayer/router/authorize";

#[derive(Debug, Default)]
struct RouterCache {
    url: Option<String>,
    /// Epoch milliseconds; 0 means never valid
    valid_until_ms: u64,
}

/// Resolves the authorize-endpoint base URL for an application.
///
/// See the crate docs for the resolution order. `fetch` is infallible:
/// every discovery failure degrades to the deterministic fallback URL.
pub struct AppRouter {
    config: Arc<ClientConfig>,
    discovery: Arc<dyn Discovery>,
    clock: Arc<dyn Clock>,
    cache: Mutex<RouterCache>,
}

impl AppRouter {
    /// Create a router over an injected discovery implementation and clock.
    pub fn new(
        config: Arc<ClientConfig>,
        discovery: Arc<dyn Discovery>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            discovery,
            clock,
            cache: Mutex::new(RouterCache::default()),
        }
    }

    /// Resolve the authorize-endpoint URL for this application.
    ///
    /// Checked on every call, in order: private-deployment override,
    /// unexpired cache, discovery (with fallback on failure).
    pub async fn fetch(&self) -> String {
        // Private deployments and local debugging bypass discovery entirely
        if let Some(play_server) = &self.config.play_server {
            return format!("{play_server}{AUTHORIZE_PATH}");
        }

        let now = self.clock.now_millis();
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if now < cache.valid_until_ms {
                if let Some(url) = &cache.url {
                    tracing::debug!(%url, "app router from cache");
                    return url.clone();
                }
            }
        }

        self.resolve().await
    }

    /// Query discovery and cache the result; degrade to the fallback
    /// address on any failure.
    async fn resolve(&self) -> String {
        let resolved = match self.discovery.resolve(&self.config.app_id).await {
            Ok(info) => match info.preferred_server() {
                Some(server) => {
                    let url = format!("https://{server}{AUTHORIZE_PATH}");
                    Some((url, info.ttl))
                }
                None => {
                    tracing::debug!("discovery response named no router server");
                    None
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "discovery failed");
                None
            }
        };

        let now = self.clock.now_millis();
        let (url, ttl_secs) = match resolved {
            Some((url, ttl)) => {
                tracing::debug!(%url, ttl, "app router from discovery");
                (url, ttl)
            }
            None => {
                let url = fallback_router_url(&self.config.app_id);
                tracing::debug!(%url, "app router from fallback");
                (url, FALLBACK_TTL_SECS)
            }
        };

        // ttl comes from the wire; saturate rather than overflow on
        // absurd values (the cache simply pins at the far future)
        let valid_until_ms = now.saturating_add(ttl_secs.saturating_mul(1000));
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.url = Some(url.clone());
        cache.valid_until_ms = valid_until_ms;
        url
    }
}
