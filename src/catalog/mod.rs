//! # Catalog
//!
//! The product listing with its search box, and the product detail page where a
//! variant is picked and added to the cart.

pub mod detail;
pub mod error;
pub mod list;

pub use detail::{DetailState, ProductDetailPage, VariantOption};
pub use error::CatalogError;
pub use list::{ProductCard, ProductListPage};
