//! Normalized outcome of a single request

use serde_json::{json, Value};

use crate::common::{Error, Result};

/// What the dispatcher hands back to the calling phase
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// True when the server answered with a 2xx status
    pub success: bool,
    /// Status code, absent when the request never got an answer
    pub status: Option<u16>,
    /// Decoded body, or `{"message": <raw text>}` when it was not JSON
    pub data: Value,
    /// Transport error description
    pub error: Option<String>,
}

impl ApiResponse {
    /// Build a result from an answered request
    pub fn answered(status: u16, data: Value) -> Self {
        Self {
            success: (200..300).contains(&status),
            status: Some(status),
            data,
            error: None,
        }
    }

    /// Build a result for a request that never got an answer
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            data: Value::Null,
            error: Some(error.into()),
        }
    }

    /// Bearer token carried by an auth response; an empty string is no token
    pub fn token(&self) -> Option<&str> {
        self.data
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// The `data` envelope a creating endpoint wraps its record in
    pub fn record(&self, endpoint: &str) -> Result<&Value> {
        self.data
            .get("data")
            .filter(|v| !v.is_null())
            .ok_or_else(|| Error::unexpected_response(endpoint, "body has no 'data' record"))
    }
}

/// Decode a body as JSON, falling back to a message wrapper
///
/// Returns the value and whether the text was valid JSON.
pub fn decode_body(text: &str) -> (Value, bool) {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => (value, true),
        Err(_) => (json!({ "message": text }), false),
    }
}
