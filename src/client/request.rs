//! Request descriptor, per-call options and URL building.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// Header name to value. Lookups that must ignore case go through
/// [`find_header`] and [`merge_headers`].
pub type Headers = BTreeMap<String, String>;

/// Everything the transport needs for one call. Built fresh per call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Per-call additions on top of the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Headers,
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sends `Authorization: Bearer <token>` on this call only.
    pub fn bearer(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }
}

/// Joins `base` and `endpoint` with exactly one slash, unless `endpoint` is
/// already an absolute URL. An empty endpoint addresses `base` itself.
pub fn build_url(base: &str, endpoint: &str) -> String {
    if has_scheme(endpoint) {
        return endpoint.to_string();
    }

    let endpoint = endpoint.trim_start_matches('/');
    if endpoint.is_empty() {
        return base.trim_end_matches('/').to_string();
    }

    format!("{}/{}", base.trim_end_matches('/'), endpoint)
}

fn has_scheme(endpoint: &str) -> bool {
    match endpoint.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Case-insensitive header lookup.
pub fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Removes every header named `name`, ignoring case.
pub fn remove_header(headers: &mut Headers, name: &str) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
}

/// Copies `overrides` into `target`; an override replaces any existing header
/// whose name differs only in case.
pub fn merge_headers(target: &mut Headers, overrides: &Headers) {
    for (name, value) in overrides {
        remove_header(target, name);
        target.insert(name.clone(), value.clone());
    }
}
