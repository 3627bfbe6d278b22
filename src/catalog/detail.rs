use crate::cart::CartBadge;
use crate::catalog::CatalogError;
use crate::clients::{CartClient, ProductClient};
use crate::format::format_currency;
use crate::model::{NewCartItem, Product, SubProduct};
use crate::notify::{Notification, Notifier};
use crate::page::PageState;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub product: PageState<Product>,
    /// Name of the chosen variant.
    pub selected: Option<String>,
}

/// One row of the package picker.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOption {
    pub name: String,
    pub price: String,
    pub struck_price: Option<String>,
    pub in_stock: bool,
    pub selected: bool,
}

/// A single product with its variant picker and add-to-cart action.
#[derive(Clone)]
pub struct ProductDetailPage {
    products: ProductClient,
    cart: CartClient,
    badge: CartBadge,
    notifier: Arc<dyn Notifier>,
    domain: String,
    product_id: String,
    currency: String,
    state: Arc<watch::Sender<DetailState>>,
}

impl ProductDetailPage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        products: ProductClient,
        cart: CartClient,
        badge: CartBadge,
        notifier: Arc<dyn Notifier>,
        domain: impl Into<String>,
        product_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(DetailState {
            product: PageState::Loading,
            selected: None,
        });
        Self {
            products,
            cart,
            badge,
            notifier,
            domain: domain.into(),
            product_id: product_id.into(),
            currency: currency.into(),
            state: Arc::new(state),
        }
    }

    /// Loads the product and preselects its first variant.
    #[instrument(skip(self), fields(domain = %self.domain, product_id = %self.product_id))]
    pub async fn load(&self) -> Result<Product, CatalogError> {
        let result = match self.products.fetch_product(&self.domain, &self.product_id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(CatalogError::ProductNotFound(self.product_id.clone())),
            Err(e) => Err(e),
        };

        match &result {
            Ok(product) => {
                info!(variants = product.sub_products.len(), "Product loaded");
                self.state.send_replace(DetailState {
                    selected: product.first_variant().map(|variant| variant.name.clone()),
                    product: PageState::Ready(product.clone()),
                });
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch product");
                self.state.send_replace(DetailState {
                    product: PageState::NotFound,
                    selected: None,
                });
            }
        }
        result
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn select_variant(&self, name: &str) -> Result<(), CatalogError> {
        let mut outcome = Err(CatalogError::NotLoaded);
        self.state.send_if_modified(|state| {
            let Some(product) = state.product.ready() else {
                return false;
            };
            if product.variant(name).is_none() {
                outcome = Err(CatalogError::UnknownVariant(name.to_string()));
                return false;
            }
            outcome = Ok(());
            let changed = state.selected.as_deref() != Some(name);
            state.selected = Some(name.to_string());
            changed
        });
        outcome
    }

    pub fn selected_variant(&self) -> Option<SubProduct> {
        let state = self.state.borrow();
        let name = state.selected.as_deref()?;
        state.product.ready()?.variant(name).cloned()
    }

    /// The add-to-cart button is enabled only for an in-stock selection.
    pub fn can_add_to_cart(&self) -> bool {
        self.selected_variant().is_some_and(|variant| variant.in_stock)
    }

    pub fn variants(&self) -> Vec<VariantOption> {
        let state = self.state.borrow();
        let Some(product) = state.product.ready() else {
            return Vec::new();
        };
        product
            .sub_products
            .iter()
            .map(|variant| VariantOption {
                name: variant.name.clone(),
                price: format_currency(variant.price, &self.currency),
                struck_price: variant
                    .struck_price()
                    .map(|original| format_currency(original, &self.currency)),
                in_stock: variant.in_stock,
                selected: state.selected.as_deref() == Some(variant.name.as_str()),
            })
            .collect()
    }

    /// Adds the selected variant to the session cart and refreshes the badge.
    #[instrument(skip(self), fields(product_id = %self.product_id))]
    pub async fn add_to_cart(&self, quantity: u32) -> Result<(), CatalogError> {
        if quantity < 1 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        if self.state.borrow().product.ready().is_none() {
            return Err(CatalogError::NotLoaded);
        }
        let variant = self.selected_variant().ok_or(CatalogError::NoVariantSelected)?;
        if !variant.in_stock {
            return Err(CatalogError::OutOfStock(variant.name));
        }

        let item = NewCartItem {
            product_id: self.product_id.clone(),
            sub_product_name: variant.name,
            quantity,
        };
        if let Err(e) = self.cart.add_item(&item).await {
            warn!(error = %e, "Failed to add item to cart");
            self.notifier.notify(Notification::error("Failed to add item to cart"));
            return Err(e.into());
        }

        if let Err(e) = self.badge.refresh(&self.cart).await {
            debug!(error = %e, "Badge refresh failed");
        }
        info!(variant = %item.sub_product_name, quantity, "Added to cart");
        self.notifier.notify(Notification::success("Added to cart"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::notify::NotificationCenter;
    use reqwest::Method;
    use serde_json::json;

    fn product_body() -> serde_json::Value {
        json!({
            "_id": "p1",
            "title": "PUBG Mobile UC",
            "subProducts": [
                { "name": "60 UC", "price": 0.99, "originalPrice": 1.29, "inStock": true },
                { "name": "8100 UC", "price": 99.0, "inStock": false }
            ]
        })
    }

    fn page(mock: &MockTransport) -> ProductDetailPage {
        ProductDetailPage::new(
            ProductClient::new(mock.client()),
            CartClient::new(mock.client()),
            CartBadge::new(),
            Arc::new(NotificationCenter::default()),
            "gamevault",
            "p1",
            "USD",
        )
    }

    #[tokio::test]
    async fn test_first_variant_is_preselected() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/store/gamevault/products/p1")
            .return_json(200, product_body());
        let page = page(&mock);

        page.load().await.unwrap();

        assert_eq!(page.state().selected.as_deref(), Some("60 UC"));
        let variants = page.variants();
        assert!(variants[0].selected);
        assert_eq!(variants[0].struck_price.as_deref(), Some("$1.29"));
        assert_eq!(variants[1].struck_price, None);
        assert!(page.can_add_to_cart());
    }

    #[tokio::test]
    async fn test_out_of_stock_is_refused_without_request() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/store/gamevault/products/p1")
            .return_json(200, product_body());
        let page = page(&mock);
        page.load().await.unwrap();

        page.select_variant("8100 UC").unwrap();
        assert!(!page.can_add_to_cart());
        assert_eq!(
            page.add_to_cart(1).await,
            Err(CatalogError::OutOfStock("8100 UC".into()))
        );
        assert_eq!(
            page.select_variant("9999 UC"),
            Err(CatalogError::UnknownVariant("9999 UC".into()))
        );
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/store/gamevault/products/p1").return_status(404);
        let page = page(&mock);

        assert_eq!(
            page.load().await,
            Err(CatalogError::ProductNotFound("p1".into()))
        );
        assert!(page.state().product.is_not_found());
        assert_eq!(page.select_variant("60 UC"), Err(CatalogError::NotLoaded));
        assert_eq!(page.add_to_cart(1).await, Err(CatalogError::NotLoaded));
    }
}
