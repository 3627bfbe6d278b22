//! # Observability & Tracing
//!
//! This module provides the tracing setup for the storefront client.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! showing every request a page issues inside the span of the operation that issued it.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`).
//! This keeps log lines short while still providing rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** from `#[instrument]` on client and page methods
//! - **Configurable log levels** via `RUST_LOG` environment variable
//!
//! ## What Gets Traced
//!
//! - **Requests**: method, path and status of every backend call
//! - **Page Operations**: fetch, update, remove, checkout, load, submit
//! - **Failures**: `warn!` with the error and the ids involved
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info storefront cart show
//!
//! # Show request bodies and payloads
//! RUST_LOG=debug storefront cart set item_1 3
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, a quantity update followed by its refetch:
//!
//! ```text
//! INFO update_quantity:set_quantity:send: Request ok method=PATCH path="/api/cart/items/item_1" status=200
//! INFO update_quantity:fetch_cart:fetch_cart:fetch_optional: Request ok method=GET path="/api/cart" status=200
//! INFO update_quantity:fetch_cart: Cart loaded items=3
//! INFO update_quantity: Cart updated item_id="item_1" quantity=3
//! ```
//!
//! The refetch appears nested under the mutation that triggered it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already say which operation a line belongs to
        .compact()
        .init();
}
