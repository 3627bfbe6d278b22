//! # Storefront Lifecycle & Wiring
//!
//! Individual pages are simple; **wiring them together** is where the shared state lives.
//! This module provides the object that builds every client once and hands out pages
//! that share them.
//!
//! **Key Responsibilities:**
//! 1. **Transport Setup** - One HTTP transport configured from [`StorefrontConfig`](crate::config::StorefrontConfig)
//! 2. **Shared State** - A single cart badge and notification center
//! 3. **Page Construction** - Cart, store, contact and catalog pages on demand
//! 4. **Observability Setup** - Initialize tracing and logging infrastructure
//!
//! ## Testing
//!
//! [`Storefront::with_transport`] accepts any [`Transport`](crate::framework::Transport),
//! so integration tests build the full wiring over a
//! [`MockTransport`](crate::framework::mock::MockTransport).

pub mod storefront;
pub mod tracing;

pub use self::storefront::Storefront;
pub use self::tracing::setup_tracing;
