//! Wire-level data structures (DTOs) exchanged with the storefront backend.
//!
//! Every response type implements [`Validate`](crate::framework::Validate) so that
//! malformed payloads are rejected at the boundary instead of reaching a view.

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod product;
pub mod store;

pub use cart::*;
pub use checkout::*;
pub use contact::*;
pub use product::*;
pub use store::*;

/// Money amounts must be finite and non-negative.
pub(crate) fn ensure_amount(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a non-negative amount, got {value}"));
    }
    Ok(())
}

pub(crate) fn ensure_present(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}
