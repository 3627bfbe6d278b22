#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **The customer-facing client of a multi-tenant digital goods store.**
//!
//! This crate holds the state behind every storefront page: the store landing page,
//! the product listing and detail pages, the session cart, the checkout handoff to the
//! payment provider, and the contact form. Each page fetches JSON from the backend and
//! keeps the decoded result as an observable view state.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why refetch-on-write?
//!
//! The backend owns the cart. The client never merges a mutation into its local copy:
//! - **Set quantity / remove**: send the request, then fetch the whole cart again.
//! - **Totals**: shown exactly as the server reported them, never recomputed.
//!
//! This keeps the client trivially consistent with the server, at the cost of one extra
//! request per mutation.
//!
//! ## 🚀 Core Concepts
//!
//! ### One transport, many clients
//! Every domain client wraps the same generic [`ResourceClient`](framework::ResourceClient),
//! which sits on a [`Transport`](framework::Transport).
//! -   **Benefit**: status handling, decoding and validation are written **once**.
//! -   **Testing**: swap the HTTP transport for an in-memory one and every page runs unchanged.
//!
//! ### Mocking: Testing without a server
//! See the [`framework::mock`] module for a complete guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each area defines its own error type (`CartError`, `StoreError`, `CatalogError`, ...).
//! The `#[from]` attribute converts the shared [`FrameworkError`](framework::FrameworkError)
//! into each of them.
//!
//! ### 2. Errors Become Notifications
//! Page operations log failures with `warn!` and report them to the user through a
//! [`Notifier`](notify::Notifier). Nothing is retried, and the previous state stays on screen.
//!
//! ### 3. Concurrency Model
//! Each user action is one async call. Calls are not serialized: two quantity updates in
//! flight each trigger their own refetch, and the refetch that settles last wins.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Plumbing ([`framework`])
//! - **Role**: HTTP transport, typed JSON decoding, boundary validation, test transports.
//! - **Key items**: [`ResourceClient`](framework::ResourceClient), [`HttpTransport`](framework::HttpTransport).
//!
//! ### 2. The Interface ([`clients`], [`model`])
//! - **Role**: One typed method per backend endpoint, over explicit serde types.
//! - **Key items**: [`CartClient`](clients::CartClient), [`Cart`](model::Cart), [`Product`](model::Product).
//!
//! ### 3. The Pages ([`cart`], [`checkout`], [`store`], [`catalog`])
//! - **Role**: View state, user actions and render-ready snapshots.
//! - **Key items**: [`CartViewModel`](cart::CartViewModel), [`CartBadge`](cart::CartBadge),
//!   [`LandingPage`](store::LandingPage), [`ProductDetailPage`](catalog::ProductDetailPage).
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Reads configuration and wires clients, badge and notifications together.
//! - **Key items**: [`Storefront`](lifecycle::Storefront), [`StorefrontConfig`](config::StorefrontConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,ignore
//! let config = StorefrontConfig::from_env()?;
//! let storefront = Storefront::from_config(&config, Arc::new(RecordingNavigator::new()))?;
//!
//! let cart = storefront.cart_page();
//! cart.fetch_cart().await?;
//! if let CartView::Items { summary, .. } = cart.view() {
//!     println!("Total: {}", summary.total);
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod format;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod page;
pub mod store;
