//! Error types for the catalog pages.

use crate::cart::CartError;
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while browsing products or adding one to the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product does not exist in this store.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product has no variant with this name.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Add-to-cart was attempted before a variant was chosen.
    #[error("No variant selected")]
    NoVariantSelected,

    /// The selected variant cannot be bought right now.
    #[error("Variant out of stock: {0}")]
    OutOfStock(String),

    /// Add-to-cart quantities start at 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The page has not loaded a product yet.
    #[error("Product not loaded")]
    NotLoaded,

    #[error(transparent)]
    Cart(#[from] CartError),

    /// The backend could not be reached or rejected the request.
    #[error("Catalog request failed: {0}")]
    Request(#[from] FrameworkError),
}
