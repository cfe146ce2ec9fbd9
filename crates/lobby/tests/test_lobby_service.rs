//! Lobby service flow tests: pre-I/O validation and authorizer propagation
//!
//! The authorizer is stubbed and counts invocations, which is how we prove
//! that argument validation fails before any asynchronous work starts.

use async_trait::async_trait;
use multiplay_core::ClientConfig;
use multiplay_lobby::{Authorization, Error, JoinRoomParams, LobbyService, Result, SessionAuthorizer};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Route debug lines to the test writer; `RUST_LOG=multiplay_lobby=debug`
/// shows request/tap traces when a test fails.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stub authorizer that either fails or grants against an unroutable URL,
/// counting how often it was consulted.
struct StubAuthorizer {
    fail: bool,
    calls: AtomicUsize,
}

impl StubAuthorizer {
    fn granting() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionAuthorizer for StubAuthorizer {
    async fn authorize(&self) -> Result<Authorization> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Authorize("session rejected".to_string()));
        }
        Ok(Authorization {
            // Closed local port: connection refused without leaving the host
            url: "http://127.0.0.1:1".to_string(),
            session_token: "tok".to_string(),
        })
    }
}

fn service_with(authorizer: Arc<StubAuthorizer>) -> LobbyService {
    let config = Arc::new(ClientConfig::new("myAppId0", "key", "user"));
    LobbyService::new(config, authorizer).unwrap()
}

#[tokio::test]
async fn test_match_random_rejects_non_object_properties_before_io() {
    init_tracing();
    let authorizer = Arc::new(StubAuthorizer::granting());
    let service = service_with(authorizer.clone());

    let result = service
        .match_random("peer1", Some(&json!([1, 2, 3])), None)
        .await;
    match result {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("is not an object")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    // Validation fired before the authorize step
    assert_eq!(authorizer.calls(), 0);
}

#[tokio::test]
async fn test_match_random_accepts_object_properties() {
    init_tracing();
    let authorizer = Arc::new(StubAuthorizer::failing());
    let service = service_with(authorizer.clone());

    // Object properties pass validation; the stubbed authorize failure
    // proves the call proceeded past it.
    let result = service
        .match_random("peer1", Some(&json!({"skill": 10})), None)
        .await;
    assert!(matches!(result, Err(Error::Authorize(_))));
    assert_eq!(authorizer.calls(), 1);
}

#[tokio::test]
async fn test_authorize_failure_propagates_unchanged() {
    init_tracing();
    let authorizer = Arc::new(StubAuthorizer::failing());
    let service = service_with(authorizer.clone());

    match service.create_room(None).await {
        Err(Error::Authorize(msg)) => assert_eq!(msg, "session rejected"),
        other => panic!("expected Authorize, got {other:?}"),
    }
    match service.join_room(JoinRoomParams::room("room1")).await {
        Err(Error::Authorize(_)) => {}
        other => panic!("expected Authorize, got {other:?}"),
    }
    match service.join_random_room(None, None).await {
        Err(Error::Authorize(_)) => {}
        other => panic!("expected Authorize, got {other:?}"),
    }
    assert_eq!(authorizer.calls(), 3);
}

#[tokio::test]
async fn test_join_random_room_does_not_validate_properties() {
    init_tracing();
    // Parity with upstream: only match_random pre-validates. A non-object
    // value here reaches the authorize step untouched.
    let authorizer = Arc::new(StubAuthorizer::failing());
    let service = service_with(authorizer.clone());

    let result = service
        .join_random_room(Some(&json!("not-an-object")), None)
        .await;
    assert!(matches!(result, Err(Error::Authorize(_))));
    assert_eq!(authorizer.calls(), 1);
}

#[tokio::test]
async fn test_authorize_passthrough() {
    init_tracing();
    let authorizer = Arc::new(StubAuthorizer::granting());
    let service = service_with(authorizer.clone());

    let auth = service.authorize().await.unwrap();
    assert_eq!(auth.session_token, "tok");
    assert_eq!(authorizer.calls(), 1);
}

#[tokio::test]
async fn test_transport_failure_keeps_reqwest_error() {
    init_tracing();
    // Granting authorizer points at an unroutable address; the send fails
    // at the transport and must surface as Error::Http, carrying no
    // backend reason code.
    let authorizer = Arc::new(StubAuthorizer::granting());
    let service = service_with(authorizer);

    match service.create_room(Some("room1")).await {
        Err(err @ Error::Http(_)) => assert_eq!(err.reason_code(), None),
        other => panic!("expected Http, got {other:?}"),
    }
}
