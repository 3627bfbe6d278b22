use crate::cart::{CartBadge, CartError, CartView, CartViewState, CurrencyLabels};
use crate::checkout::{CheckoutError, Navigator};
use crate::clients::{CartClient, CheckoutClient};
use crate::model::{Cart, CartItem, CheckoutSession};
use crate::notify::{Notification, Notifier};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// State holder for the cart page.
///
/// The cart shown is always the one the server last reported. Mutations never touch
/// the local snapshot; each accepted mutation is followed by a full refetch.
///
/// Calls are independent: two mutations in flight each trigger their own refetch and
/// whichever refetch settles last decides the final state.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct CartViewModel {
    cart_client: CartClient,
    checkout_client: CheckoutClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    badge: CartBadge,
    labels: CurrencyLabels,
    state: Arc<watch::Sender<CartViewState>>,
}

impl CartViewModel {
    pub fn new(
        cart_client: CartClient,
        checkout_client: CheckoutClient,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        badge: CartBadge,
        labels: CurrencyLabels,
    ) -> Self {
        // The page starts out waiting for its first fetch.
        let (state, _) = watch::channel(CartViewState {
            loading: true,
            cart: None,
        });
        Self {
            cart_client,
            checkout_client,
            notifier,
            navigator,
            badge,
            labels,
            state: Arc::new(state),
        }
    }

    /// Retrieves the current cart and replaces the snapshot.
    ///
    /// A missing cart and a cart without items both end in the empty state. On failure
    /// the previous cart stays in place and the user is told the cart failed to load.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) -> Result<(), CartError> {
        self.state.send_modify(|state| state.loading = true);

        match self.cart_client.fetch_cart().await {
            Ok(cart) => {
                let cart = cart.filter(|cart| !cart.is_empty());
                let count = cart.as_ref().map_or(0, Cart::item_count);
                info!(items = count, "Cart loaded");
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.cart = cart;
                });
                self.badge.set(count);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load cart");
                self.state.send_modify(|state| state.loading = false);
                self.notifier.notify(Notification::error("Failed to load cart"));
                Err(e)
            }
        }
    }

    /// Sets an item's quantity on the server, then refetches.
    ///
    /// A quantity of zero is rejected before anything is sent.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            debug!(item_id, quantity, "Quantity rejected");
            return Err(CartError::InvalidQuantity(quantity.to_string()));
        }

        if let Err(e) = self.cart_client.set_quantity(item_id, quantity).await {
            warn!(item_id, quantity, error = %e, "Failed to update cart");
            self.notifier.notify(Notification::error("Failed to update cart"));
            return Err(e);
        }

        self.resync().await;
        info!(item_id, quantity, "Cart updated");
        self.notifier.notify(Notification::success("Cart updated successfully"));
        Ok(())
    }

    /// The `+` control.
    pub async fn increment(&self, item_id: &str) -> Result<(), CartError> {
        let item = self.current_item(item_id)?;
        self.update_quantity(item_id, item.quantity.saturating_add(1)).await
    }

    /// The `-` control. Does nothing at quantity 1.
    pub async fn decrement(&self, item_id: &str) -> Result<(), CartError> {
        let item = self.current_item(item_id)?;
        if !item.can_decrement() {
            debug!(item_id, "Decrement blocked at quantity 1");
            return Err(CartError::DecrementBlocked(item_id.to_string()));
        }
        self.update_quantity(item_id, item.quantity - 1).await
    }

    /// The numeric quantity box. Only positive integers are dispatched.
    pub async fn set_quantity_input(&self, item_id: &str, raw: &str) -> Result<(), CartError> {
        let quantity = raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .and_then(|quantity| u32::try_from(quantity).ok())
            .ok_or_else(|| CartError::InvalidQuantity(raw.to_string()))?;
        self.update_quantity(item_id, quantity).await
    }

    /// Removes an item on the server, then refetches.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, item_id: &str) -> Result<(), CartError> {
        if let Err(e) = self.cart_client.remove_item(item_id).await {
            warn!(item_id, error = %e, "Failed to remove item");
            self.notifier
                .notify(Notification::error("Failed to remove item from cart"));
            return Err(e);
        }

        self.resync().await;
        info!(item_id, "Item removed");
        self.notifier.notify(Notification::success("Item removed from cart"));
        Ok(())
    }

    /// Creates a payment session and hands the browsing context to the provider.
    ///
    /// On failure nothing is navigated.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<CheckoutSession, CheckoutError> {
        match self.checkout_client.create_session().await {
            Ok(session) => {
                info!(payment_id = %session.payment_id, "Handing off to payment page");
                self.navigator.navigate(&session.bkash_url);
                Ok(session)
            }
            Err(e) => {
                warn!(error = %e, "Failed to process checkout");
                self.notifier.notify(Notification::error("Failed to process checkout"));
                Err(e)
            }
        }
    }

    pub fn view(&self) -> CartView {
        CartView::render(&self.state.borrow(), &self.labels)
    }

    pub fn snapshot(&self) -> CartViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CartViewState> {
        self.state.subscribe()
    }

    pub fn badge(&self) -> &CartBadge {
        &self.badge
    }

    pub fn labels(&self) -> &CurrencyLabels {
        &self.labels
    }

    // A failed refetch has already told the user; the mutation itself succeeded.
    async fn resync(&self) {
        if let Err(e) = self.fetch_cart().await {
            debug!(error = %e, "Refetch after mutation failed");
        }
    }

    fn current_item(&self, item_id: &str) -> Result<CartItem, CartError> {
        self.state
            .borrow()
            .cart
            .as_ref()
            .and_then(|cart| cart.item(item_id))
            .cloned()
            .ok_or_else(|| CartError::ItemNotFound(item_id.to_string()))
    }
}
