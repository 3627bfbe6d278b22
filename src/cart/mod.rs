//! # Cart
//!
//! The cart page state and its refetch-on-write flow.
//!
//! - [`CartViewModel`]: holds the server's cart, issues mutations and resynchronizes
//!   after each one.
//! - [`CartBadge`]: the shared item count shown in the store header.
//! - [`CartView`]: a render-ready snapshot with formatted amounts.

pub mod badge;
pub mod error;
pub mod view;
pub mod view_model;

pub use badge::CartBadge;
pub use error::CartError;
pub use view::{CartLineView, CartSummaryView, CartView, CartViewState, CurrencyLabels};
pub use view_model::CartViewModel;
