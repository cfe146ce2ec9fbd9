//! Multiplay Lobby - session-authorized room operations
//!
//! Every lobby call follows the same shape: obtain `(url, session_token)`
//! from the [`SessionAuthorizer`], POST a JSON payload carrying the fixed
//! client metadata plus operation-specific fields, and normalize the
//! response. Structured backend failures become [`PlayError`]s; pure
//! transport failures pass through untouched.
//!
//! Operations:
//!
//! - [`LobbyService::create_room`] - create a room, optionally named
//! - [`LobbyService::join_room`] - join (or rejoin) a named room
//! - [`LobbyService::join_random_room`] - join a random room by match
//!   properties
//! - [`LobbyService::match_random`] - match against a piggyback peer;
//!   note its response renames `cid` to `room_name`, unlike every other
//!   operation
//!
//! [`PlayError`]: multiplay_core::PlayError

pub mod authorizer;
pub mod error;
pub mod service;

pub use authorizer::{Authorization, SessionAuthorizer};
pub use error::{Error, Result};
pub use service::{
    CreatedRoom, JoinRoomParams, JoinedRoom, LobbyService, MatchedRoom, RandomRoom,
};
