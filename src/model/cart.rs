use crate::framework::Validate;
use crate::model::{ensure_amount, ensure_present};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The session cart as reported by the backend.
///
/// `total` is server-authoritative: it is never recomputed from the items, and its
/// currency unit is supplied by the caller at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub total: f64,
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product: CartProduct,
    #[serde(default)]
    pub sub_product_name: String,
    /// Unit price at the time the item was added.
    pub price: f64,
    pub quantity: u32,
}

/// The product summary embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities, as shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// The decrement control is disabled at quantity 1.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }
}

impl Validate for Cart {
    fn validate(&self) -> Result<(), String> {
        ensure_amount("total", self.total)?;
        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(format!("duplicate cart item id {}", item.id));
            }
        }
        Ok(())
    }
}

impl Validate for CartItem {
    fn validate(&self) -> Result<(), String> {
        ensure_present("cart item id", &self.id)?;
        ensure_amount("price", self.price)?;
        if self.quantity < 1 {
            return Err(format!("item {} has quantity {}", self.id, self.quantity));
        }
        Ok(())
    }
}

/// Body of `PATCH /api/cart/items/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

/// Body of `POST /api/cart/items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: String,
    pub sub_product_name: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{decode, FrameworkError};
    use serde_json::json;

    fn cart_json(quantity: i64) -> String {
        json!({
            "items": [{
                "_id": "item_1",
                "product": { "title": "Steam Wallet", "imageUrl": "https://cdn.example.com/steam.png" },
                "subProductName": "$20 Card",
                "price": 10.0,
                "quantity": quantity
            }],
            "total": 30.0
        })
        .to_string()
    }

    #[test]
    fn test_decode_cart_from_wire_format() {
        let cart: Cart = decode("/api/cart", &cart_json(3)).unwrap();
        let item = cart.item("item_1").unwrap();
        assert_eq!(item.product.title, "Steam Wallet");
        assert_eq!(item.sub_product_name, "$20 Card");
        assert_eq!(item.line_total(), 30.0);
        assert_eq!(cart.item_count(), 3);
        assert!(item.can_decrement());
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let err = decode::<Cart>("/api/cart", &cart_json(0)).unwrap_err();
        assert!(matches!(err, FrameworkError::Validation { .. }));
    }

    #[test]
    fn test_negative_quantity_fails_decoding() {
        let err = decode::<Cart>("/api/cart", &cart_json(-1)).unwrap_err();
        assert!(matches!(err, FrameworkError::Decode { .. }));
    }

    #[test]
    fn test_duplicate_item_ids_fail_validation() {
        let item = json!({ "_id": "x", "product": { "title": "A" }, "price": 1.0, "quantity": 1 });
        let body = json!({ "items": [item.clone(), item], "total": 2.0 }).to_string();
        let err = decode::<Cart>("/api/cart", &body).unwrap_err();
        assert!(matches!(err, FrameworkError::Validation { ref reason, .. } if reason.contains("duplicate")));
    }

    #[test]
    fn test_missing_items_means_empty_cart() {
        let cart: Cart = decode("/api/cart", r#"{"total": 0}"#).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_request_bodies_use_wire_names() {
        let body = serde_json::to_value(NewCartItem {
            product_id: "p1".into(),
            sub_product_name: "Gold".into(),
            quantity: 2,
        })
        .unwrap();
        assert_eq!(body, json!({ "productId": "p1", "subProductName": "Gold", "quantity": 2 }));
        assert_eq!(
            serde_json::to_value(QuantityUpdate { quantity: 4 }).unwrap(),
            json!({ "quantity": 4 })
        );
    }
}
