//! Redaction of sensitive headers and body fields before they reach a log.

use serde_json::{Map, Value};

use crate::client::Headers;

/// Placeholder written in place of a sensitive value.
pub const REDACTED: &str = "[REDACTED]";

/// Header names (lowercase) whose values are always redacted.
pub const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key", "x-auth-token"];

/// Substrings that mark a body field as sensitive, matched against the
/// lowercase field name.
pub const SENSITIVE_FIELDS: &[&str] = &["password", "token", "secret", "key", "ssn", "creditcard"];

/// Returns a copy of `headers` with sensitive values replaced by [`REDACTED`].
pub fn sanitize_headers(headers: &Headers) -> Headers {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if is_sensitive_header(name) {
                REDACTED.to_string()
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}

/// Returns the query pairs in send order, repeated keys included, with the
/// value of every sensitive field redacted.
pub fn sanitize_query(query: &[(String, String)]) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(key, value)| {
            let value = if is_sensitive_field(key) {
                REDACTED.to_string()
            } else {
                value.clone()
            };
            (key.clone(), value)
        })
        .collect()
}

/// Returns a deep copy of `body` with every sensitive field redacted, at any
/// depth and inside arrays. Scalars come back unchanged.
pub fn sanitize_body(body: &Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(sanitize_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_body).collect()),
        scalar => scalar.clone(),
    }
}

fn sanitize_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let value = if is_sensitive_field(key) {
                Value::String(REDACTED.to_string())
            } else {
                sanitize_body(value)
            };
            (key.clone(), value)
        })
        .collect()
}

pub fn is_sensitive_header(name: &str) -> bool {
    SENSITIVE_HEADERS
        .iter()
        .any(|sensitive| name.eq_ignore_ascii_case(sensitive))
}

pub fn is_sensitive_field(name: &str) -> bool {
    let name = name.to_lowercase();
    SENSITIVE_FIELDS.iter().any(|pattern| name.contains(pattern))
}
