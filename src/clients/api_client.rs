use crate::framework::{ApiRequest, FrameworkError, ResourceClient, Validate};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Trait for endpoint-specific clients to inherit the standard request shapes.
///
/// This trait reduces boilerplate by providing default implementations that
/// run a request through the inner [`ResourceClient`] and map the failure into the
/// client's own error type.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// The area-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch and decode a resource that must exist.
    #[tracing::instrument(skip(self, request), fields(path = %request.path()))]
    async fn fetch<T>(&self, request: ApiRequest) -> Result<T, Self::Error>
    where
        T: DeserializeOwned + Validate + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner().fetch(request).await.map_err(Self::map_error)
    }

    /// Fetch and decode a resource that may be absent (`404`, empty body, or `null`).
    #[tracing::instrument(skip(self, request), fields(path = %request.path()))]
    async fn fetch_optional<T>(&self, request: ApiRequest) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned + Validate + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner().fetch_optional(request).await.map_err(Self::map_error)
    }

    /// Send a request whose response body is irrelevant.
    #[tracing::instrument(skip(self, request), fields(path = %request.path()))]
    async fn send(&self, request: ApiRequest) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().send(request).await.map_err(Self::map_error)
    }
}
