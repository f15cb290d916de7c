//! HTTP transport seam and its reqwest implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use tracing::debug;

use super::request::{ApiRequest, Headers};

/// Failure to get any HTTP response at all. A 4xx/5xx status is not one.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The host could not be reached (refused, DNS failure, ...).
    #[error("connection error: {0}")]
    Connection(String),
}

/// What came back over the wire, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Vec<u8>,
    /// Final URL after redirects.
    pub url: String,
}

/// Sends one request and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest::Client`.
/// Redirects are followed with reqwest's default policy.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self { http_client })
    }

    /// Wraps an already configured client (proxies, TLS roots, ...).
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn header_map(headers: &Headers) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .timeout(request.timeout)
            .headers(Self::header_map(&request.headers)?);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(method = %request.method, url = %request.url, "sending request");

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                TransportError::Connection(e.to_string())
            } else {
                TransportError::Request(e)
            }
        })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing: &mut String| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        let body = response.bytes().await?.to_vec();

        debug!(status, url = %url, bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            headers,
            body,
            url,
        })
    }
}
