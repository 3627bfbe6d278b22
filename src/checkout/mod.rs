//! # Checkout Handoff
//!
//! Checkout is a one-shot handoff: create a payment session, then send the
//! browsing context to the provider's hosted page. Nothing is tracked after the
//! redirect.

pub mod error;

pub use error::CheckoutError;

use std::sync::Mutex;
use tracing::info;

/// Moves the browsing context to another URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// A [`Navigator`] that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        match self.visited.lock() {
            Ok(visited) => visited.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        info!(%url, "Navigate");
        match self.visited.lock() {
            Ok(mut visited) => visited.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
    }
}
