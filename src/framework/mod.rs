//! Generic HTTP/JSON plumbing shared by every storefront client.
//!
//! This module provides the building blocks the domain clients are written against:
//! a pluggable [`Transport`], the typed [`ResourceClient`] that sits on top of it,
//! and the boundary [`Validate`] contract for decoded responses.
//!
//! # Main Components
//!
//! - [`Transport`] - Sends one [`ApiRequest`] and returns the raw [`ApiResponse`]
//! - [`HttpTransport`] - The production transport backed by `reqwest`
//! - [`ResourceClient`] - Typed JSON client that maps statuses and bodies to [`FrameworkError`]
//!
//! # Testing
//!
//! See [`mock`] module for transports that let a test play the backend.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
