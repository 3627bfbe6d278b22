use crate::clients::api_client::ApiClient;
use crate::framework::{ApiRequest, FrameworkError, ResourceClient};
use crate::model::{ContactMessage, Store};
use crate::store::StoreError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the per-tenant `/api/store/{domain}` endpoints.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient,
}

impl StoreClient {
    pub fn new(inner: ResourceClient) -> Self {
        Self { inner }
    }

    /// `GET /api/store/{domain}`. An unknown domain (`404`) comes back as `None`.
    #[instrument(skip(self))]
    pub async fn fetch_store(&self, domain: &str) -> Result<Option<Store>, StoreError> {
        self.fetch_optional(ApiRequest::get(&["api", "store", domain])).await
    }

    /// `POST /api/store/{domain}/contact`.
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    pub async fn send_contact(&self, domain: &str, message: &ContactMessage) -> Result<(), StoreError> {
        debug!(?message, "Sending contact message");
        let request = ApiRequest::post(&["api", "store", domain, "contact"]).with_json(message)?;
        self.send(request).await
    }
}

#[async_trait]
impl ApiClient for StoreClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::Request(e)
    }
}
