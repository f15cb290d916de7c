//! Response envelope returned to callers.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::request::{Headers, find_header};
use super::transport::RawResponse;

/// Normalized response: status, parsed JSON body, headers and final URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed body, or `Null` when the body is empty or not JSON.
    pub data: Value,
    pub headers: Headers,
    pub url: String,
}

impl ApiResponse {
    pub fn from_raw(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            data: parse_body(&raw.body),
            headers: raw.headers,
            url: raw.url,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Deserializes `data` into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }

    /// The `error.message` field of a failure body, if present.
    pub fn error_message(&self) -> Option<&str> {
        self.data
            .get("error")
            .and_then(|error| error.get("message").or(Some(error)))
            .and_then(Value::as_str)
    }
}

fn parse_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "response body is not JSON");
            Value::Null
        }
    }
}
