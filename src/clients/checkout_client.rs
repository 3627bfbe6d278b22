use crate::checkout::CheckoutError;
use crate::clients::api_client::ApiClient;
use crate::framework::{ApiRequest, FrameworkError, ResourceClient};
use crate::model::CheckoutSession;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for `POST /api/checkout`.
///
/// Creating the session is the only thing the client does; the payment itself
/// happens on the provider's hosted page.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: ResourceClient,
}

impl CheckoutClient {
    pub fn new(inner: ResourceClient) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_session(&self) -> Result<CheckoutSession, CheckoutError> {
        let session: CheckoutSession = self.fetch(ApiRequest::post(&["api", "checkout"])).await?;
        info!(payment_id = %session.payment_id, "Payment session created");
        Ok(session)
    }
}

#[async_trait]
impl ApiClient for CheckoutClient {
    type Error = CheckoutError;

    fn inner(&self) -> &ResourceClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CheckoutError::Request(e)
    }
}
