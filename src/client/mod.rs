//! API client: URL building, default headers, bearer auth and sanitized
//! request/response logging over a pluggable [`Transport`].

mod request;
mod response;
mod transport;

pub use request::{
    ApiRequest, Headers, RequestOptions, build_url, find_header, merge_headers, remove_header,
};
pub use response::ApiResponse;
pub use reqwest::Method;
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use crate::config::Config;
use crate::logger::{Logger, sanitize_body, sanitize_headers, sanitize_query};

/// Used when the client is built without a config.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the API under test.
///
/// Every verb goes through [`ApiClient::request`], which logs the sanitized
/// request, sends it, and logs either the sanitized response or the
/// transport error before handing it back unchanged.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
    headers: Headers,
    logger: Arc<Logger>,
}

impl ApiClient {
    /// Creates a client for `base_url` over the given transport.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: Self::default_headers(),
            logger,
        }
    }

    /// Creates a reqwest-backed client rooted at `API_BASE_URL` with the
    /// configured request timeout.
    pub fn from_config(config: &Config, logger: Arc<Logger>) -> Result<Self, TransportError> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::new(transport, config.api_base_url.clone(), logger)
            .with_timeout(config.test_timeout))
    }

    /// Same transport, logger and headers, different root (e.g. `AUTH_BASE_URL`).
    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: base_url.into(),
            timeout: self.timeout,
            headers: self.headers.clone(),
            logger: Arc::clone(&self.logger),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `Content-Type` and `Accept` set to JSON.
    pub fn default_headers() -> Headers {
        Headers::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ])
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request from this client.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        build_url(&self.base_url, endpoint)
    }

    /// Sends `Authorization: Bearer <token>` on every later request.
    pub fn set_auth_token(&mut self, token: impl AsRef<str>) {
        remove_header(&mut self.headers, "authorization");
        self.headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.as_ref()),
        );
    }

    pub fn clear_auth_token(&mut self) {
        remove_header(&mut self.headers, "authorization");
    }

    /// Replaces the whole default header set.
    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }

    pub async fn get(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::GET, endpoint, None, options).await
    }

    pub async fn post(
        &self,
        endpoint: &str,
        body: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::POST, endpoint, body, options).await
    }

    pub async fn put(
        &self,
        endpoint: &str,
        body: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::PUT, endpoint, body, options).await
    }

    pub async fn patch(
        &self,
        endpoint: &str,
        body: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::PATCH, endpoint, body, options).await
    }

    pub async fn delete(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::DELETE, endpoint, None, options).await
    }

    /// Sends one request. No retries: a transport failure is logged once and
    /// returned as-is.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, TransportError> {
        let request = self.build_request(method, endpoint, body, options.unwrap_or_default());

        self.logger.info(
            format!("API request: {} {}", request.method, request.url),
            Some(json!({
                "headers": sanitize_headers(&request.headers),
                "query": sanitize_query(&request.query),
                "body": request.body.as_ref().map(sanitize_body),
            })),
        );

        match self.transport.send(&request).await {
            Ok(raw) => {
                let response = ApiResponse::from_raw(raw);
                self.logger.info(
                    format!(
                        "API response: {} {} {}",
                        response.status, request.method, response.url
                    ),
                    Some(json!({
                        "status": response.status,
                        "headers": sanitize_headers(&response.headers),
                        "data": sanitize_body(&response.data),
                    })),
                );
                Ok(response)
            }
            Err(e) => {
                self.logger.error(
                    format!("API request failed: {} {}", request.method, request.url),
                    Some(json!({ "error": e.to_string() })),
                );
                Err(e)
            }
        }
    }

    fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> ApiRequest {
        let mut headers = self.headers.clone();
        merge_headers(&mut headers, &options.headers);

        ApiRequest {
            method,
            url: self.build_url(endpoint),
            headers,
            body,
            query: options.query,
            timeout: options.timeout.unwrap_or(self.timeout),
        }
    }
}
