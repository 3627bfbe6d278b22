//! # Cart Client
//!
//! Provides a high-level API for the session cart endpoints.
//! It wraps a [`ResourceClient`] and exposes one method per endpoint.
use crate::cart::CartError;
use crate::clients::api_client::ApiClient;
use crate::framework::{ApiRequest, FrameworkError, ResourceClient};
use crate::model::{Cart, NewCartItem, QuantityUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the `/api/cart` endpoints.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiClient for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::Request(e)
    }
}

impl CartClient {
    /// `GET /api/cart`. A missing cart (`404`) comes back as `None`.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) -> Result<Option<Cart>, CartError> {
        self.fetch_optional(ApiRequest::get(&["api", "cart"])).await
    }

    /// `PATCH /api/cart/items/{item_id}` with `{ quantity }`.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        debug!(item_id, quantity, "Setting quantity");
        let request = ApiRequest::patch(&["api", "cart", "items", item_id])
            .with_json(&QuantityUpdate { quantity })?;
        self.send(request).await
    }

    /// `DELETE /api/cart/items/{item_id}`.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: &str) -> Result<(), CartError> {
        debug!(item_id, "Removing item");
        self.send(ApiRequest::delete(&["api", "cart", "items", item_id])).await
    }

    /// `POST /api/cart/items` with `{ productId, subProductName, quantity }`.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: &NewCartItem) -> Result<(), CartError> {
        debug!(?item, "Adding item");
        let request = ApiRequest::post(&["api", "cart", "items"]).with_json(item)?;
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_transport, empty_response, expect_request, json_response, MockTransport};
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_quantity_sends_patch_body() {
        let (transport, mut receiver) = create_mock_transport(10);
        let cart_client = CartClient::new(ResourceClient::new(Arc::new(transport)));

        let patch_task = tokio::spawn(async move { cart_client.set_quantity("item_1", 4).await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected PATCH request");
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.path(), "/api/cart/items/item_1");
        assert_eq!(request.body, Some(json!({ "quantity": 4 })));
        responder.send(Ok(empty_response(200))).unwrap();

        assert!(patch_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_cart_not_found_is_none() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/cart").return_status(404);
        mock.expect(Method::GET, "/api/cart").return_body(200, "null");

        let cart_client = CartClient::new(mock.client());
        assert_eq!(cart_client.fetch_cart().await.unwrap(), None);
        assert_eq!(cart_client.fetch_cart().await.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_remove_item_failure_maps_to_cart_error() {
        let (transport, mut receiver) = create_mock_transport(10);
        let cart_client = CartClient::new(ResourceClient::new(Arc::new(transport)));

        let remove_task = tokio::spawn(async move { cart_client.remove_item("item_9").await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected DELETE request");
        assert_eq!(request.method, Method::DELETE);
        responder
            .send(Ok(json_response(500, json!({ "error": "boom" }))))
            .unwrap();

        match remove_task.await.unwrap() {
            Err(CartError::Request(FrameworkError::Status { status, path })) => {
                assert_eq!(status, 500);
                assert_eq!(path, "/api/cart/items/item_9");
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }
}
