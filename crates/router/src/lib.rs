//! Multiplay Router - resolves which regional server handles an application
//!
//! The router answers one question: what is the authorize-endpoint base URL
//! for this `app_id` right now? Resolution order:
//!
//! 1. A configured private-deployment override always wins (no I/O).
//! 2. A cached discovery result is reused while its TTL holds.
//! 3. Otherwise the discovery endpoint is queried; its answer is cached for
//!    the server-specified TTL.
//!
//! Discovery is a soft dependency: any failure (network, parse, or a
//! response naming no server) degrades to a deterministic fallback address
//! derived from the `app_id`, cached for three hours. [`AppRouter::fetch`]
//! therefore never fails - only the authorizer and lobby layers surface
//! user-visible errors.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use multiplay_core::{ClientConfig, SystemClock};
//! use multiplay_router::{AppRouter, HttpDiscovery};
//!
//! let config = Arc::new(ClientConfig::new("myAppId0000", "key", "user"));
//! let router = AppRouter::new(
//!     config,
//!     Arc::new(HttpDiscovery::new()?),
//!     Arc::new(SystemClock),
//! );
//! let url = router.fetch().await;
//! ```

pub mod app_router;
pub mod discovery;
pub mod error;
pub mod fallback;

pub use app_router::AppRouter;
pub use discovery::{Discovery, HttpDiscovery, RouteInfo};
pub use error::{Error, Result};
pub use fallback::fallback_router_url;
