//! Lobby service implementation
//!
//! Request shaping: every payload carries the fixed client metadata
//! (`gameVersion`, `sdkVersion`, `protocolVersion`, `useInsecureAddr`);
//! optional fields are omitted from the JSON entirely when absent. Wire
//! field names are camelCase.
//!
//! Error mapping runs exactly once per operation, at the outermost point
//! of the request path (see [`Error`] for the taxonomy).

use crate::authorizer::SessionAuthorizer;
use crate::error::{Error, Result};
use multiplay_core::{ClientConfig, PlayError, PROTOCOL_VERSION, SDK_VERSION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const HEADER_APP_ID: &str = "X-LC-ID";
const HEADER_APP_KEY: &str = "X-LC-KEY";
const HEADER_USER_ID: &str = "X-LC-PLAY-USER-ID";
const HEADER_SESSION_TOKEN: &str = "X-LC-PLAY-MULTIPLAYER-SESSION-TOKEN";

const LOBBY_ROOM_PATH: &str = "/1/multiplayer/lobby/room";
const LOBBY_MATCH_PATH: &str = "/1/multiplayer/lobby/match/room";

/// Payload for room creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRoomRequest<'a> {
    game_version: &'a str,
    sdk_version: &'a str,
    protocol_version: &'a str,
    use_insecure_addr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cid: Option<&'a str>,
}

/// Payload for joining a named room.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinRoomRequest<'a> {
    cid: &'a str,
    game_version: &'a str,
    sdk_version: &'a str,
    protocol_version: &'a str,
    use_insecure_addr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    expect_members: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejoin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create_on_not_found: Option<bool>,
}

/// Payload for random matching, with or without a piggyback peer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchRoomRequest<'a> {
    game_version: &'a str,
    sdk_version: &'a str,
    protocol_version: &'a str,
    use_insecure_addr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    piggyback_peer_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expect_attr: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expect_members: Option<&'a [String]>,
}

/// Result of [`LobbyService::create_room`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRoom {
    /// Room name (server-assigned when none was requested)
    pub cid: String,
    /// Game server address to connect to
    pub addr: String,
}

/// Result of [`LobbyService::join_room`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedRoom {
    /// Room name
    pub cid: String,
    /// Game server address to connect to
    pub addr: String,
    /// Whether the room was created on the fly (`createOnNotFound`)
    #[serde(default)]
    pub room_created: bool,
}

/// Result of [`LobbyService::join_random_room`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomRoom {
    /// Room name
    pub cid: String,
    /// Game server address to connect to
    pub addr: String,
}

/// Result of [`LobbyService::match_random`].
///
/// The backend still answers with `cid`; this operation alone renames it
/// to `room_name`. Deliberate asymmetry in the upstream API surface, kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchedRoom {
    /// Room name (wire field `cid`)
    #[serde(rename = "cid")]
    pub room_name: String,
    /// Game server address to connect to
    pub addr: String,
}

/// Parameters for [`LobbyService::join_room`].
#[derive(Debug, Clone, Default)]
pub struct JoinRoomParams {
    /// Room to join
    pub room_name: String,
    /// Reserve seats for these user ids
    pub expected_user_ids: Option<Vec<String>>,
    /// Rejoin after a disconnect
    pub rejoin: Option<bool>,
    /// Create the room if it does not exist
    pub create_on_not_found: Option<bool>,
}

impl JoinRoomParams {
    /// Join `room_name` with no extras
    pub fn room(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            ..Self::default()
        }
    }
}

/// Session-authorized lobby operations.
///
/// Each operation authorizes first, then POSTs against the authorized
/// server. Operations are independent; there is no ordering guarantee
/// between concurrent calls and no retry at this layer.
pub struct LobbyService {
    config: Arc<ClientConfig>,
    authorizer: Arc<dyn SessionAuthorizer>,
    client: reqwest::Client,
}

impl LobbyService {
    /// Create a lobby service over a session authorizer.
    pub fn new(config: Arc<ClientConfig>, authorizer: Arc<dyn SessionAuthorizer>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            config,
            authorizer,
            client,
        })
    }

    /// Obtain a session authorization directly.
    pub async fn authorize(&self) -> Result<crate::Authorization> {
        self.authorizer.authorize().await
    }

    /// Create a room, optionally requesting a specific name.
    pub async fn create_room(&self, room_name: Option<&str>) -> Result<CreatedRoom> {
        let auth = self.authorizer.authorize().await?;
        let url = format!("{}{}", auth.url, LOBBY_ROOM_PATH);
        let body = CreateRoomRequest {
            game_version: &self.config.game_version,
            sdk_version: SDK_VERSION,
            protocol_version: PROTOCOL_VERSION,
            use_insecure_addr: self.config.use_insecure_addr,
            cid: room_name,
        };
        self.post(&url, &auth.session_token, &body).await
    }

    /// Join a named room, optionally rejoining or creating it on the fly.
    pub async fn join_room(&self, params: JoinRoomParams) -> Result<JoinedRoom> {
        let auth = self.authorizer.authorize().await?;
        let url = format!("{}{}/{}", auth.url, LOBBY_ROOM_PATH, params.room_name);
        let body = JoinRoomRequest {
            cid: &params.room_name,
            game_version: &self.config.game_version,
            sdk_version: SDK_VERSION,
            protocol_version: PROTOCOL_VERSION,
            use_insecure_addr: self.config.use_insecure_addr,
            expect_members: params.expected_user_ids.as_deref(),
            rejoin: params.rejoin,
            create_on_not_found: params.create_on_not_found,
        };
        self.post(&url, &auth.session_token, &body).await
    }

    /// Join a random room matching `match_properties`.
    ///
    /// Unlike [`match_random`](Self::match_random), performs no argument
    /// validation; an ill-shaped `match_properties` goes to the backend
    /// verbatim.
    pub async fn join_random_room(
        &self,
        match_properties: Option<&Value>,
        expected_user_ids: Option<&[String]>,
    ) -> Result<RandomRoom> {
        let auth = self.authorizer.authorize().await?;
        let url = format!("{}{}", auth.url, LOBBY_MATCH_PATH);
        let body = MatchRoomRequest {
            game_version: &self.config.game_version,
            sdk_version: SDK_VERSION,
            protocol_version: PROTOCOL_VERSION,
            use_insecure_addr: self.config.use_insecure_addr,
            piggyback_peer_id: None,
            expect_attr: match_properties,
            expect_members: expected_user_ids,
        };
        self.post(&url, &auth.session_token, &body).await
    }

    /// Match a random room using an existing connected peer as the anchor.
    ///
    /// `match_properties`, when present, must be a JSON object; anything
    /// else is rejected before any authorization or network activity.
    pub async fn match_random(
        &self,
        piggyback_peer_id: &str,
        match_properties: Option<&Value>,
        expected_user_ids: Option<&[String]>,
    ) -> Result<MatchedRoom> {
        if let Some(props) = match_properties {
            if !props.is_object() {
                return Err(Error::InvalidArgument(format!(
                    "{props} is not an object"
                )));
            }
        }
        let auth = self.authorizer.authorize().await?;
        let url = format!("{}{}", auth.url, LOBBY_MATCH_PATH);
        let body = MatchRoomRequest {
            game_version: &self.config.game_version,
            sdk_version: SDK_VERSION,
            protocol_version: PROTOCOL_VERSION,
            use_insecure_addr: self.config.use_insecure_addr,
            piggyback_peer_id: Some(piggyback_peer_id),
            expect_attr: match_properties,
            expect_members: expected_user_ids,
        };
        self.post(&url, &auth.session_token, &body).await
    }

    /// Shared POST path: headers, send, normalize.
    async fn post<T, B>(&self, url: &str, session_token: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        tracing::debug!(%url, "lobby request");
        let response = self
            .client
            .post(url)
            .header(HEADER_APP_ID, &self.config.app_id)
            .header(HEADER_APP_KEY, &self.config.app_key)
            .header(HEADER_USER_ID, &self.config.user_id)
            .header(HEADER_SESSION_TOKEN, session_token)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(tap_error(status, text));
        }
        tracing::debug!(%text, "lobby response");
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

/// Normalize a non-success response: a structured backend body becomes a
/// [`PlayError`], anything else keeps the raw status and body.
fn tap_error(status: StatusCode, body: String) -> Error {
    tracing::error!(status = status.as_u16(), %body, "lobby request failed");
    match serde_json::from_str::<PlayError>(&body) {
        Ok(play) => Error::Play(play),
        Err(_) => Error::Status {
            status: status.as_u16(),
            body,
        },
    }
}
