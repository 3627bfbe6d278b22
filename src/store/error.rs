//! Error types for the store pages.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while loading a store or sending a contact message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No store is registered under this domain.
    #[error("Store not found: {0}")]
    NotFound(String),

    /// The contact form failed client-side validation.
    #[error("Invalid contact message: {0}")]
    InvalidContact(String),

    /// The backend could not be reached or rejected the request.
    #[error("Store request failed: {0}")]
    Request(#[from] FrameworkError),
}
