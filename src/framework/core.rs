//! # Core Transport Framework
//!
//! This module defines the generic building blocks every storefront client uses to
//! talk to the backend.
//!
//! ## Key Types
//!
//! - [`ApiRequest`] / [`ApiResponse`]: A transport-neutral view of one HTTP exchange.
//! - [`Transport`]: The seam between clients and the network.
//! - [`HttpTransport`]: `reqwest`-backed transport rooted at the API base URL.
//! - [`ResourceClient`]: Typed JSON access with uniform error mapping.
//! - [`FrameworkError`]: Transport, status, decode and validation failures.

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

// =============================================================================
// 1. ERRORS & BOUNDARY VALIDATION
// =============================================================================

/// Errors that can occur below the domain clients.
///
/// Every non-2xx status is a [`FrameworkError::Status`]; the response body is never
/// inspected for an error code.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Unexpected status {status} from {path}")]
    Status { status: u16, path: String },
    #[error("Malformed response from {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Response from {path} failed validation: {reason}")]
    Validation { path: String, reason: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FrameworkError {
    /// True for a `404 Not Found` status.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::Status { status: 404, .. })
    }
}

/// Structural checks applied to every decoded response before it reaches a view.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| item.validate().map_err(|e| format!("[{index}]: {e}")))
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), String> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

/// Decodes a JSON body and runs [`Validate`] on the result.
pub fn decode<T: DeserializeOwned + Validate>(path: &str, body: &str) -> Result<T, FrameworkError> {
    let value: T = serde_json::from_str(body).map_err(|e| FrameworkError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    value.validate().map_err(|reason| FrameworkError::Validation {
        path: path.to_string(),
        reason,
    })?;
    Ok(value)
}

// =============================================================================
// 2. THE REQUEST / RESPONSE PAIR
// =============================================================================

/// One request against the backend API.
///
/// The path is kept as raw segments; the transport is responsible for
/// percent-encoding them when it builds the final URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn patch(segments: &[&str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, FrameworkError> {
        let value = serde_json::to_value(body)
            .map_err(|e| FrameworkError::InvalidRequest(format!("unserializable body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// The unencoded path, e.g. `/api/cart/items/42`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// The raw outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// =============================================================================
// 3. THE TRANSPORT SEAM
// =============================================================================

/// Sends a single request and hands back whatever the server answered.
///
/// Implementations only fail with [`FrameworkError::Transport`] (or
/// [`FrameworkError::InvalidRequest`]); status interpretation belongs to
/// [`ResourceClient`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FrameworkError>;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    session_cookie: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FrameworkError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FrameworkError::InvalidRequest(format!("bad base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FrameworkError::InvalidRequest(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            session_cookie: None,
        })
    }

    /// Forwards the given `Cookie` header so the backend can find the session's cart.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Joins the request path onto the base URL, percent-encoding each segment.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, FrameworkError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                FrameworkError::InvalidRequest(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(&request.segments);
        }
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FrameworkError> {
        let url = self.url_for(&request)?;
        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A typed JSON client over any [`Transport`].
///
/// Cheap to clone: it only holds an `Arc` to the transport, so the same client can be
/// shared by every view that talks to the backend.
#[derive(Clone)]
pub struct ResourceClient {
    transport: Arc<dyn Transport>,
}

impl ResourceClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends the request and turns any non-2xx status into [`FrameworkError::Status`].
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, FrameworkError> {
        let method = request.method.clone();
        let path = request.path();
        debug!(%method, %path, body = ?request.body, "Dispatching request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %path, error = %e, "Transport failed");
                return Err(e);
            }
        };

        if !response.status.is_success() {
            let status = response.status.as_u16();
            warn!(%method, %path, status, "Request rejected");
            return Err(FrameworkError::Status { status, path });
        }

        info!(%method, %path, status = response.status.as_u16(), "Request ok");
        Ok(response)
    }

    /// Sends the request and decodes the JSON body.
    pub async fn fetch<T: DeserializeOwned + Validate>(&self, request: ApiRequest) -> Result<T, FrameworkError> {
        let path = request.path();
        let response = self.execute(request).await?;
        decode(&path, &response.body)
    }

    /// Like [`fetch`](Self::fetch), but `404`, an empty body and JSON `null` all yield `None`.
    pub async fn fetch_optional<T: DeserializeOwned + Validate>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, FrameworkError> {
        let path = request.path();
        match self.execute(request).await {
            Ok(response) if response.body.trim().is_empty() => Ok(None),
            Ok(response) => decode(&path, &response.body),
            Err(e) if e.is_not_found() => {
                debug!(%path, "Resource not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Sends the request and discards the response body.
    pub async fn send(&self, request: ApiRequest) -> Result<(), FrameworkError> {
        self.execute(request).await.map(|_| ())
    }
}
