//! Wire format of the plugin command endpoint.
//!
//! Requests are posted as `{"id", "method", "params"}`; the endpoint answers
//! with `{"id", "result"}` or `{"id", "error"}`.

use crate::error::RemoteCallFailure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest<'a> {
    pub id: u64,
    pub method: &'a str,
    pub params: &'a Value,
}

impl<'a> CommandRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a Value) -> Self {
        Self { id, method, params }
    }

    pub fn to_body(&self) -> Result<String, RemoteCallFailure> {
        serde_json::to_string(self).map_err(|e| RemoteCallFailure::Malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

/// URL of `endpoint` relative to `base_url` (`""` means same origin).
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}

/// Turn a response body into the call's outcome.
pub fn decode_response(body: &str) -> Result<Value, RemoteCallFailure> {
    let response: CommandResponse =
        serde_json::from_str(body).map_err(|e| RemoteCallFailure::Malformed(e.to_string()))?;
    match response.error {
        None => Ok(response.result),
        Some(error) => Err(RemoteCallFailure::Remote(error)),
    }
}
