//! Multiplay Core - transport-free foundation for the Multiplay SDK
//!
//! This crate holds everything the routing and lobby layers share without
//! pulling in any transport dependency:
//!
//! - [`ClientConfig`] - immutable client configuration (credentials, game
//!   version, private-deployment override)
//! - [`PlayError`] - the normalized backend failure shape
//! - [`Clock`] - monotonic-enough time source so TTL logic is testable
//!   without real time passing
//! - Client metadata constants attached to every outbound lobby payload

pub mod clock;
pub mod config;
pub mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ClientConfig;
pub use error::PlayError;

/// SDK version string reported in every lobby payload.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire protocol version. Independent of the crate version; bump only when
/// the backend contract changes.
pub const PROTOCOL_VERSION: &str = "1.0";
