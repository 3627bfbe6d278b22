//! # Mock Transports & Testing Guide
//!
//! Two in-memory transports let tests play the backend without opening a socket.
//!
//! ## When to use which
//!
//! | Feature | MockTransport | Channel transport |
//! |---------|---------------|-------------------|
//! | **Style** | Scripted expectations, answered in order | Test receives each request and answers by hand |
//! | **Determinism** | 100% Deterministic | 100% Deterministic, including response ordering |
//! | **Use Case** | Sequential flows (fetch, mutate, refetch) | Interleavings of concurrent requests |
//! | **Error Injection** | `return_status`, `return_err` | Send any `Result` on the responder |
//!
//! ## Pattern 0: Scripted backend
//!
//! ```rust
//! use storefront::framework::mock::MockTransport;
//! use storefront::framework::{ApiRequest, FrameworkError};
//! use reqwest::Method;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::GET, "/api/cart")
//!         .return_json(200, json!({ "items": [], "total": 0 }));
//!     mock.expect(Method::DELETE, "/api/cart/items/1").return_status(500);
//!
//!     let client = mock.client();
//!     assert!(client.execute(ApiRequest::get(&["api", "cart"])).await.is_ok());
//!
//!     let result = client.send(ApiRequest::delete(&["api", "cart", "items", "1"])).await;
//!     assert!(matches!(result, Err(FrameworkError::Status { status: 500, .. })));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Test plays the server
//!
//! ```rust
//! use storefront::framework::mock::{create_mock_transport, expect_request, json_response};
//! use storefront::framework::{ApiRequest, ResourceClient};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (transport, mut server) = create_mock_transport(8);
//!     let client = ResourceClient::new(Arc::new(transport));
//!
//!     let call = tokio::spawn(async move { client.execute(ApiRequest::post(&["api", "checkout"])).await });
//!
//!     let (request, respond_to) = expect_request(&mut server).await.unwrap();
//!     assert_eq!(request.path(), "/api/checkout");
//!     respond_to.send(Ok(json_response(200, json!({ "ok": true })))).unwrap();
//!
//!     assert!(call.await.unwrap().is_ok());
//! }
//! ```

use crate::framework::core::{ApiRequest, ApiResponse, FrameworkError, ResourceClient, Transport};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Builds a JSON response with the given status code.
pub fn json_response(status: u16, body: serde_json::Value) -> ApiResponse {
    ApiResponse::new(status_code(status), body.to_string())
}

/// Builds a response with an empty body.
pub fn empty_response(status: u16) -> ApiResponse {
    ApiResponse::new(status_code(status), "")
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).expect("mock status must be a valid HTTP status code")
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted exchange: the request we expect next and what to answer.
struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, FrameworkError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<ApiRequest>,
}

/// A transport that answers from a queue of expectations, in order.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new();
/// mock.expect(Method::GET, "/api/cart").return_json(200, json!({"items": [], "total": 0}));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expectation for the next request.
    pub fn expect(&self, method: Method, path: &str) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.to_string(),
            state: self.state.clone(),
        }
    }

    /// Returns a [`ResourceClient`] wired to this mock.
    pub fn client(&self) -> ResourceClient {
        ResourceClient::new(self.transport())
    }

    /// Returns this mock as a shareable transport.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().received.clone()
    }

    /// Number of received requests matching the method and path.
    pub fn count(&self, method: &Method, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .received
            .iter()
            .filter(|r| &r.method == method && r.path() == path)
            .count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FrameworkError> {
        let mut state = self.state.lock().unwrap();
        let path = request.path();
        let expectation = match state.expectations.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected request: {} {}", request.method, path),
        };
        if expectation.method != request.method || expectation.path != path {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.path, request.method, path
            );
        }
        state.received.push(request);
        expectation.response
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Answers with a JSON body.
    pub fn return_json(self, status: u16, body: serde_json::Value) {
        self.push(Ok(json_response(status, body)));
    }

    /// Answers with an empty body.
    pub fn return_status(self, status: u16) {
        self.push(Ok(empty_response(status)));
    }

    /// Answers with a raw, possibly malformed, body.
    pub fn return_body(self, status: u16, body: &str) {
        self.push(Ok(ApiResponse::new(status_code(status), body)));
    }

    /// Fails the request before it reaches the "server".
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, FrameworkError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

// =============================================================================
// CHANNEL TRANSPORT
// =============================================================================

/// Responder half handed to the test for each intercepted request.
pub type Responder = oneshot::Sender<Result<ApiResponse, FrameworkError>>;

/// A request intercepted by [`ChannelTransport`].
#[derive(Debug)]
pub struct TransportRequest {
    pub request: ApiRequest,
    pub respond_to: Responder,
}

/// Transport that forwards every request to a channel the test controls.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<TransportRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TransportRequest { request, respond_to })
            .await
            .map_err(|_| FrameworkError::Transport("mock server closed".to_string()))?;
        response
            .await
            .map_err(|_| FrameworkError::Transport("mock server dropped the request".to_string()))?
    }
}

/// Creates a channel transport and the receiver the test reads requests from.
///
/// # Testing Strategy
/// Instead of scripting answers up front, the test receives each request as it arrives
/// and decides when and how to answer it. Holding a responder while answering a later
/// request is how out-of-order completions are reproduced.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<TransportRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Waits for the next intercepted request.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<TransportRequest>,
) -> Option<(ApiRequest, Responder)> {
    receiver
        .recv()
        .await
        .map(|TransportRequest { request, respond_to }| (request, respond_to))
}
