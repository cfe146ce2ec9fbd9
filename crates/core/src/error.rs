//! Normalized backend failure shape

use serde::Deserialize;
use thiserror::Error;

/// Structured failure reported by the multiplayer backend.
///
/// Failed lobby requests carry a JSON body of the form
/// `{"reasonCode": 4301, "detail": "room full"}`; this is its decoded form.
/// Both fields are required, so arbitrary error bodies (HTML pages, plain
/// text) do not accidentally decode as a `PlayError`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("play error {reason_code}: {detail}")]
pub struct PlayError {
    /// Backend reason code (e.g. 4301 = room full)
    pub reason_code: i32,
    /// Human-readable detail message
    pub detail: String,
}

impl PlayError {
    /// Construct a `PlayError` directly (mostly useful in tests)
    pub fn new(reason_code: i32, detail: impl Into<String>) -> Self {
        Self {
            reason_code,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_body() {
        let err: PlayError =
            serde_json::from_str(r#"{"reasonCode":4301,"detail":"room full"}"#).unwrap();
        assert_eq!(err.reason_code, 4301);
        assert_eq!(err.detail, "room full");
    }

    #[test]
    fn test_rejects_unstructured_body() {
        assert!(serde_json::from_str::<PlayError>(r#"{"error":"boom"}"#).is_err());
        assert!(serde_json::from_str::<PlayError>("<html>502</html>").is_err());
    }

    #[test]
    fn test_display() {
        let err = PlayError::new(4301, "room full");
        assert_eq!(err.to_string(), "play error 4301: room full");
    }
}
