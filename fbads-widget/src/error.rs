//! Failure of a managed remote call.

use serde_json::Value;
use thiserror::Error;

/// Any rejection of a managed call.
///
/// The binding never propagates this further; it is always handed to the
/// chart's error display. Variants only describe where the call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteCallFailure {
    /// The request never produced a response (network, HTTP status, JS fetch error).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The remote side answered with an error value.
    #[error("remote error: {0}")]
    Remote(Value),
    /// The response body could not be understood.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The host stopped the call before it completed.
    #[error("call cancelled")]
    Cancelled,
}

impl RemoteCallFailure {
    /// Short, user-facing message for chart error overlays.
    pub fn message(&self) -> String {
        match self {
            RemoteCallFailure::Remote(Value::String(s)) => s.clone(),
            RemoteCallFailure::Remote(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_string_error_is_shown_verbatim() {
        let err = RemoteCallFailure::Remote(json!("invalid access token"));
        assert_eq!(err.message(), "invalid access token");
    }

    #[test]
    fn remote_object_error_prefers_message_field() {
        let err = RemoteCallFailure::Remote(json!({"code": 190, "message": "session expired"}));
        assert_eq!(err.message(), "session expired");

        let bare = RemoteCallFailure::Remote(json!({"code": 190}));
        assert_eq!(bare.message(), "remote error: {\"code\":190}");
    }

    #[test]
    fn local_failures_use_display() {
        assert_eq!(RemoteCallFailure::Cancelled.message(), "call cancelled");
        assert_eq!(
            RemoteCallFailure::Transport("HTTP 502".to_string()).message(),
            "transport failure: HTTP 502"
        );
    }
}
