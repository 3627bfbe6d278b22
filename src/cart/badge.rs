//! The item count shown on the cart icon in the store header.

use crate::cart::CartError;
use crate::clients::CartClient;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Shared, observable cart item count.
///
/// Every clone points at the same value, so the header, the cart page and the
/// product page all see one number. Subscribers are woken on every change.
#[derive(Clone)]
pub struct CartBadge {
    count: Arc<watch::Sender<u32>>,
}

impl CartBadge {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self {
            count: Arc::new(sender),
        }
    }

    pub fn count(&self) -> u32 {
        *self.count.borrow()
    }

    pub fn set(&self, count: u32) {
        let previous = self.count.send_replace(count);
        if previous != count {
            debug!(previous, count, "Badge updated");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.count.subscribe()
    }

    /// Re-reads the server cart and publishes its item count.
    ///
    /// A missing cart counts as zero. On failure the badge keeps its last value.
    #[instrument(skip(self, client))]
    pub async fn refresh(&self, client: &CartClient) -> Result<u32, CartError> {
        let count = client
            .fetch_cart()
            .await?
            .map_or(0, |cart| cart.item_count());
        self.set(count);
        Ok(count)
    }
}

impl Default for CartBadge {
    fn default() -> Self {
        Self::new()
    }
}
