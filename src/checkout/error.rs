//! Error types for the checkout handoff.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while creating a payment session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// The backend could not be reached, rejected the request, or returned an unusable session.
    #[error("Checkout request failed: {0}")]
    Request(#[from] FrameworkError),
}
