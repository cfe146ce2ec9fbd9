//! Client configuration
//!
//! Configuration is assembled once by the owning client object and shared
//! (typically behind an `Arc`) with the router and lobby components. It is
//! immutable after construction; there is no runtime reconfiguration.

/// Configuration for a Multiplay client.
///
/// `app_id` / `app_key` identify the application against the backend,
/// `user_id` identifies the local player. `play_server`, when set, points at
/// a private deployment and bypasses router discovery entirely.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application identifier
    pub app_id: String,
    /// Application key, sent on every lobby request
    pub app_key: String,
    /// Local user identifier
    pub user_id: String,
    /// Game version used for version-segregated matchmaking
    pub game_version: String,
    /// Request insecure (ws/http) room addresses from the backend
    pub use_insecure_addr: bool,
    /// Private-deployment server base URL (e.g. "https://play.internal:8080").
    /// When present, discovery is skipped on every call.
    pub play_server: Option<String>,
    /// Feature flag forwarded to the session authorizer
    pub feature: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with default game version ("0.0.1"), secure
    /// addresses, and no private-server override.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            user_id: user_id.into(),
            game_version: "0.0.1".to_string(),
            use_insecure_addr: false,
            play_server: None,
            feature: None,
        }
    }

    /// Set the game version
    pub fn with_game_version(mut self, game_version: impl Into<String>) -> Self {
        self.game_version = game_version.into();
        self
    }

    /// Request insecure room addresses
    pub fn with_insecure_addr(mut self, insecure: bool) -> Self {
        self.use_insecure_addr = insecure;
        self
    }

    /// Point the client at a private deployment, bypassing discovery
    pub fn with_play_server(mut self, play_server: impl Into<String>) -> Self {
        self.play_server = Some(play_server.into());
        self
    }

    /// Set the authorizer feature flag
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }
}
