//! # Product Client
//!
//! Read-only access to a store's catalog.
use crate::catalog::CatalogError;
use crate::clients::api_client::ApiClient;
use crate::framework::{ApiRequest, FrameworkError, ResourceClient};
use crate::model::Product;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for `/api/store/{domain}/products`.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient,
}

impl ProductClient {
    pub fn new(inner: ResourceClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiClient for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::Request(e)
    }
}

impl ProductClient {
    /// Lists the store's products, or only the featured ones.
    #[instrument(skip(self))]
    pub async fn list_products(&self, domain: &str, featured_only: bool) -> Result<Vec<Product>, CatalogError> {
        let mut request = ApiRequest::get(&["api", "store", domain, "products"]);
        if featured_only {
            request = request.with_query("featured", "true");
        }
        let products: Vec<Product> = self.fetch(request).await?;
        debug!(count = products.len(), "Products listed");
        Ok(products)
    }

    /// Fetches one product. An unknown id (`404`) comes back as `None`.
    #[instrument(skip(self))]
    pub async fn fetch_product(&self, domain: &str, product_id: &str) -> Result<Option<Product>, CatalogError> {
        self.fetch_optional(ApiRequest::get(&["api", "store", domain, "products", product_id]))
            .await
    }
}
