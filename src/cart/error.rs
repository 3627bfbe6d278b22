//! Error types for the cart.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The quantity is not a positive integer; nothing was sent.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The item is not in the current cart snapshot.
    #[error("Cart item not found: {0}")]
    ItemNotFound(String),

    /// Decrementing would take the quantity below 1; nothing was sent.
    #[error("Quantity of item {0} is already 1")]
    DecrementBlocked(String),

    /// The backend could not be reached or rejected the request.
    #[error("Cart request failed: {0}")]
    Request(#[from] FrameworkError),
}
