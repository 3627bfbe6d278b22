use crate::framework::Validate;
use crate::model::{ensure_amount, ensure_present};
use serde::{Deserialize, Serialize};

/// A catalog product as served by `GET /api/store/{domain}/products`.
///
/// Prices live on the variants ([`SubProduct`]); a product without variants can be
/// listed but not added to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub instant_delivery: bool,
    #[serde(default)]
    pub sub_products: Vec<SubProduct>,
    #[serde(default)]
    pub important_note: Option<String>,
    #[serde(default)]
    pub guide_enabled: bool,
    #[serde(default)]
    pub guide: Option<String>,
}

/// A purchasable variant of a product (e.g. a package tier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub in_stock: bool,
}

impl Product {
    /// Category as displayed: `gift_cards` becomes `gift cards`.
    pub fn category_label(&self) -> String {
        self.category.replace('_', " ")
    }

    /// Case-insensitive substring match on title or description.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.description.to_lowercase().contains(&query)
    }

    pub fn first_variant(&self) -> Option<&SubProduct> {
        self.sub_products.first()
    }

    pub fn variant(&self, name: &str) -> Option<&SubProduct> {
        self.sub_products.iter().find(|variant| variant.name == name)
    }

    /// Variants beyond the first one, shown as "+N more options".
    pub fn extra_variant_count(&self) -> usize {
        self.sub_products.len().saturating_sub(1)
    }

    /// The usage guide, only when the store enabled it.
    pub fn usage_guide(&self) -> Option<&str> {
        if !self.guide_enabled {
            return None;
        }
        self.guide.as_deref().filter(|guide| !guide.trim().is_empty())
    }
}

impl SubProduct {
    /// The pre-discount price, only when it is actually higher.
    pub fn struck_price(&self) -> Option<f64> {
        self.original_price.filter(|original| *original > self.price)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), String> {
        ensure_present("product id", &self.id)?;
        ensure_present("product title", &self.title)?;
        self.sub_products
            .iter()
            .try_for_each(|variant| variant.validate().map_err(|e| format!("product {}: {e}", self.id)))
    }
}

impl Validate for SubProduct {
    fn validate(&self) -> Result<(), String> {
        ensure_present("variant name", &self.name)?;
        ensure_amount("price", self.price)?;
        if let Some(original) = self.original_price {
            ensure_amount("originalPrice", original)?;
        }
        Ok(())
    }
}
