use crate::catalog::CatalogError;
use crate::clients::{ProductClient, StoreClient};
use crate::model::{Product, Store};
use crate::page::PageState;
use crate::store::StoreError;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// The store shell: name, branding and contact details for one domain.
#[derive(Clone)]
pub struct StorePage {
    client: StoreClient,
    domain: String,
    state: Arc<watch::Sender<PageState<Store>>>,
}

impl StorePage {
    pub fn new(client: StoreClient, domain: impl Into<String>) -> Self {
        let (state, _) = watch::channel(PageState::Loading);
        Self {
            client,
            domain: domain.into(),
            state: Arc::new(state),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Loads the store. Any failure leaves the page in [`PageState::NotFound`].
    #[instrument(skip(self), fields(domain = %self.domain))]
    pub async fn load(&self) -> Result<Store, StoreError> {
        let result = match self.client.fetch_store(&self.domain).await {
            Ok(Some(store)) => Ok(store),
            Ok(None) => Err(StoreError::NotFound(self.domain.clone())),
            Err(e) => Err(e),
        };

        match &result {
            Ok(store) => {
                info!(name = %store.name, "Store loaded");
                self.state.send_replace(PageState::Ready(store.clone()));
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch store");
                self.state.send_replace(PageState::NotFound);
            }
        }
        result
    }

    pub fn state(&self) -> PageState<Store> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState<Store>> {
        self.state.subscribe()
    }
}

/// What the landing page shows once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub store: Store,
    pub featured: Vec<Product>,
}

/// The store's home page: metadata plus featured products, fetched side by side.
#[derive(Clone)]
pub struct LandingPage {
    stores: StoreClient,
    products: ProductClient,
    domain: String,
    state: Arc<watch::Sender<PageState<LandingContent>>>,
}

impl LandingPage {
    pub fn new(stores: StoreClient, products: ProductClient, domain: impl Into<String>) -> Self {
        let (state, _) = watch::channel(PageState::Loading);
        Self {
            stores,
            products,
            domain: domain.into(),
            state: Arc::new(state),
        }
    }

    /// Fetches both halves concurrently. If either fails the whole page is not found.
    #[instrument(skip(self), fields(domain = %self.domain))]
    pub async fn load(&self) -> Result<LandingContent, StoreError> {
        let (store, featured) = tokio::join!(
            self.stores.fetch_store(&self.domain),
            self.products.list_products(&self.domain, true)
        );

        let result = match (store, featured) {
            (Ok(Some(store)), Ok(featured)) => Ok(LandingContent { store, featured }),
            (Ok(None), _) => Err(StoreError::NotFound(self.domain.clone())),
            (Err(e), _) => Err(e),
            (_, Err(CatalogError::Request(e))) => Err(StoreError::Request(e)),
            (_, Err(e)) => Err(StoreError::NotFound(format!("{}: {e}", self.domain))),
        };

        match &result {
            Ok(content) => {
                info!(featured = content.featured.len(), "Landing page loaded");
                self.state.send_replace(PageState::Ready(content.clone()));
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch store data");
                self.state.send_replace(PageState::NotFound);
            }
        }
        result
    }

    pub fn state(&self) -> PageState<LandingContent> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState<LandingContent>> {
        self.state.subscribe()
    }
}
