//! Render-ready snapshots of the cart page.
//!
//! The view never formats amounts from its own knowledge of the currency: line
//! prices use the item label and the order summary uses the summary label, both
//! taken from [`CurrencyLabels`] as given.

use crate::format::format_currency;
use crate::model::{Cart, CartItem};

/// What the cart view-model holds between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartViewState {
    /// True while a fetch is in flight.
    pub loading: bool,
    /// The last cart the server reported. `None` means no cart or no items.
    pub cart: Option<Cart>,
}

/// Currency unit labels used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLabels {
    pub item: String,
    pub summary: String,
}

impl CurrencyLabels {
    pub fn new(item: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            summary: summary.into(),
        }
    }
}

impl Default for CurrencyLabels {
    fn default() -> Self {
        Self::new("USD", "BDT")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    /// First load still in flight.
    Loading,
    Empty,
    Items {
        lines: Vec<CartLineView>,
        summary: CartSummaryView,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub item_id: String,
    pub title: String,
    pub variant: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    /// The decrement control is disabled at quantity 1.
    pub can_decrement: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSummaryView {
    pub subtotal: String,
    pub processing_fee: String,
    pub total: String,
}

impl CartView {
    /// Builds the view for a state snapshot.
    ///
    /// A refetch over an existing cart keeps showing that cart; only a load with
    /// nothing to show yet renders as [`CartView::Loading`].
    pub fn render(state: &CartViewState, labels: &CurrencyLabels) -> Self {
        match &state.cart {
            None if state.loading => CartView::Loading,
            Some(cart) if !cart.is_empty() => CartView::Items {
                lines: cart.items.iter().map(|item| CartLineView::render(item, labels)).collect(),
                summary: CartSummaryView::render(cart, labels),
            },
            _ => CartView::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty)
    }

    pub fn lines(&self) -> &[CartLineView] {
        match self {
            CartView::Items { lines, .. } => lines,
            _ => &[],
        }
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLineView> {
        self.lines().iter().find(|line| line.item_id == item_id)
    }
}

impl CartLineView {
    fn render(item: &CartItem, labels: &CurrencyLabels) -> Self {
        Self {
            item_id: item.id.clone(),
            title: item.product.title.clone(),
            variant: item.sub_product_name.clone(),
            image_url: item.product.image_url.clone(),
            quantity: item.quantity,
            unit_price: format_currency(item.price, &labels.item),
            line_total: format_currency(item.line_total(), &labels.item),
            can_decrement: item.can_decrement(),
        }
    }
}

impl CartSummaryView {
    fn render(cart: &Cart, labels: &CurrencyLabels) -> Self {
        Self {
            subtotal: format_currency(cart.total, &labels.summary),
            processing_fee: format_currency(0.0, &labels.summary),
            total: format_currency(cart.total, &labels.summary),
        }
    }
}
