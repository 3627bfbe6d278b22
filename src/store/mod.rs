//! # Store Pages
//!
//! Everything rendered under a store's domain that is not the catalog or the cart:
//! the store shell ([`StorePage`]), the landing page with featured products
//! ([`LandingPage`]) and the contact page ([`ContactPage`]).
//!
//! A store that fails to load for any reason is shown as not found; there is no retry.

pub mod contact;
pub mod error;
pub mod page;

pub use contact::{ContactFormState, ContactPage};
pub use error::StoreError;
pub use page::{LandingContent, LandingPage, StorePage};
