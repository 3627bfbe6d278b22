use crate::cart::{CartBadge, CartViewModel, CurrencyLabels};
use crate::catalog::{ProductDetailPage, ProductListPage};
use crate::checkout::Navigator;
use crate::clients::{CartClient, CheckoutClient, ProductClient, StoreClient};
use crate::config::StorefrontConfig;
use crate::framework::{FrameworkError, HttpTransport, ResourceClient, Transport};
use crate::notify::{NotificationCenter, Notifier};
use crate::store::{ContactPage, LandingPage, StorePage};
use std::sync::Arc;
use tracing::info;

/// Wires the clients, the shared badge and the notification center together
/// and hands out pages that share them.
///
/// `Storefront` is responsible for:
/// - **Transport Setup**: One HTTP transport (or a test transport) behind every client
/// - **Shared State**: A single [`CartBadge`] and [`NotificationCenter`] for all pages
/// - **Page Construction**: Every page gets the same clients and currency labels
///
/// # Example
///
/// ```ignore
/// let config = StorefrontConfig::from_env()?;
/// let storefront = Storefront::from_config(&config, Arc::new(RecordingNavigator::new()))?;
///
/// let cart = storefront.cart_page();
/// cart.fetch_cart().await?;
/// println!("{} items", storefront.badge.count());
/// ```
#[derive(Clone)]
pub struct Storefront {
    pub cart_client: CartClient,
    pub checkout_client: CheckoutClient,
    pub store_client: StoreClient,
    pub product_client: ProductClient,

    /// Item count shown in the header, shared by every page.
    pub badge: CartBadge,

    pub notifications: NotificationCenter,

    navigator: Arc<dyn Navigator>,
    labels: CurrencyLabels,
}

impl Storefront {
    /// Builds a storefront talking HTTP to the configured backend.
    pub fn from_config(config: &StorefrontConfig, navigator: Arc<dyn Navigator>) -> Result<Self, FrameworkError> {
        let mut transport = HttpTransport::new(&config.api_base_url, config.http_timeout)?;
        if let Some(cookie) = &config.session_cookie {
            transport = transport.with_session_cookie(cookie.clone());
        }
        info!(
            api_base_url = %config.api_base_url,
            timeout_secs = config.http_timeout.as_secs(),
            "Storefront ready"
        );
        Ok(Self::with_transport(
            Arc::new(transport),
            config.currency.clone(),
            navigator,
        ))
    }

    /// Builds a storefront over any transport.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        labels: CurrencyLabels,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let client = ResourceClient::new(transport);
        Self {
            cart_client: CartClient::new(client.clone()),
            checkout_client: CheckoutClient::new(client.clone()),
            store_client: StoreClient::new(client.clone()),
            product_client: ProductClient::new(client),
            badge: CartBadge::new(),
            notifications: NotificationCenter::default(),
            navigator,
            labels,
        }
    }

    pub fn labels(&self) -> &CurrencyLabels {
        &self.labels
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(self.notifications.clone())
    }

    pub fn cart_page(&self) -> CartViewModel {
        CartViewModel::new(
            self.cart_client.clone(),
            self.checkout_client.clone(),
            self.notifier(),
            self.navigator.clone(),
            self.badge.clone(),
            self.labels.clone(),
        )
    }

    pub fn store_page(&self, domain: &str) -> StorePage {
        StorePage::new(self.store_client.clone(), domain)
    }

    pub fn landing_page(&self, domain: &str) -> LandingPage {
        LandingPage::new(self.store_client.clone(), self.product_client.clone(), domain)
    }

    pub fn contact_page(&self, domain: &str) -> ContactPage {
        ContactPage::new(self.store_client.clone(), domain, self.notifier())
    }

    pub fn product_list(&self, domain: &str) -> ProductListPage {
        ProductListPage::new(self.product_client.clone(), domain, self.labels.item.clone())
    }

    pub fn product_detail(&self, domain: &str, product_id: &str) -> ProductDetailPage {
        ProductDetailPage::new(
            self.product_client.clone(),
            self.cart_client.clone(),
            self.badge.clone(),
            self.notifier(),
            domain,
            product_id,
            self.labels.item.clone(),
        )
    }
}
