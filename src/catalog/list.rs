use crate::catalog::CatalogError;
use crate::clients::ProductClient;
use crate::format::format_currency;
use crate::model::Product;
use crate::page::PageState;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Summary of a product as shown in the listing grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product_id: String,
    pub title: String,
    /// `region • category`
    pub subtitle: String,
    pub image_url: Option<String>,
    pub instant_delivery: bool,
    pub featured: bool,
    /// Name and price of the first variant.
    pub starting_at: Option<(String, String)>,
    /// `+N more options` when the product has more than one variant.
    pub more_options: Option<String>,
}

impl ProductCard {
    pub fn new(product: &Product, currency: &str) -> Self {
        let extra = product.extra_variant_count();
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            subtitle: format!("{} • {}", product.region, product.category_label()),
            image_url: product.image_url.clone(),
            instant_delivery: product.instant_delivery,
            featured: product.featured,
            starting_at: product
                .first_variant()
                .map(|variant| (variant.name.clone(), format_currency(variant.price, currency))),
            more_options: (extra > 0).then(|| format!("+{extra} more options")),
        }
    }
}

/// All products of a store, filtered by the search box.
#[derive(Clone)]
pub struct ProductListPage {
    client: ProductClient,
    domain: String,
    currency: String,
    products: Arc<watch::Sender<PageState<Vec<Product>>>>,
    search: Arc<watch::Sender<String>>,
}

impl ProductListPage {
    pub fn new(client: ProductClient, domain: impl Into<String>, currency: impl Into<String>) -> Self {
        let (products, _) = watch::channel(PageState::Loading);
        let (search, _) = watch::channel(String::new());
        Self {
            client,
            domain: domain.into(),
            currency: currency.into(),
            products: Arc::new(products),
            search: Arc::new(search),
        }
    }

    #[instrument(skip(self), fields(domain = %self.domain))]
    pub async fn load(&self) -> Result<(), CatalogError> {
        match self.client.list_products(&self.domain, false).await {
            Ok(products) => {
                info!(count = products.len(), "Products loaded");
                self.products.send_replace(PageState::Ready(products));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch products");
                self.products.send_replace(PageState::NotFound);
                Err(e)
            }
        }
    }

    pub fn set_search(&self, text: impl Into<String>) {
        self.search.send_replace(text.into());
    }

    pub fn search(&self) -> String {
        self.search.borrow().clone()
    }

    pub fn state(&self) -> PageState<Vec<Product>> {
        self.products.borrow().clone()
    }

    /// Products matching the current search, in server order.
    pub fn visible(&self) -> Vec<Product> {
        let search = self.search.borrow();
        match &*self.products.borrow() {
            PageState::Ready(products) => products
                .iter()
                .filter(|product| product.matches_search(&search))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible()
            .iter()
            .map(|product| ProductCard::new(product, &self.currency))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_filters_title_and_description() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/store/gamevault/products").return_json(
            200,
            json!([
                {
                    "_id": "p1",
                    "title": "Free Fire Diamonds",
                    "description": "Top up instantly",
                    "region": "Bangladesh",
                    "category": "game_top_up",
                    "subProducts": [
                        { "name": "100 Diamonds", "price": 1.5, "inStock": true },
                        { "name": "500 Diamonds", "price": 7.0, "inStock": true },
                        { "name": "1000 Diamonds", "price": 13.0, "inStock": false }
                    ]
                },
                { "_id": "p2", "title": "Netflix", "description": "Gift card for STREAMING" }
            ]),
        );
        let page = ProductListPage::new(ProductClient::new(mock.client()), "gamevault", "USD");
        page.load().await.unwrap();

        assert_eq!(page.visible().len(), 2);
        page.set_search("streaming");
        assert_eq!(page.visible()[0].id, "p2");
        page.set_search("DIAMOND");
        let cards = page.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].subtitle, "Bangladesh • game top up");
        assert_eq!(
            cards[0].starting_at,
            Some(("100 Diamonds".to_string(), "$1.50".to_string()))
        );
        assert_eq!(cards[0].more_options.as_deref(), Some("+2 more options"));

        page.set_search("nothing like this");
        assert!(page.cards().is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_shows_nothing() {
        let mock = MockTransport::new();
        mock.expect(Method::GET, "/api/store/gamevault/products").return_status(503);
        let page = ProductListPage::new(ProductClient::new(mock.client()), "gamevault", "USD");

        assert!(page.load().await.is_err());
        assert!(page.state().is_not_found());
        assert!(page.visible().is_empty());
    }
}
