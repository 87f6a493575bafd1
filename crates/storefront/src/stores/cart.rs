//! Shopping cart.
//!
//! Line items are kept in insertion order and keyed by [`VariantKey`]
//! (`<product id>_<size>`), at most one line per key. Totals are derived
//! from the lines on every read. Every mutation is written through to
//! storage under [`keys::CART`].

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dripstore_core::{Price, ProductSnapshot, Size, VariantKey};
use tracing::{debug, instrument, warn};

use crate::checkout::CheckoutSummary;
use crate::models::LineItem;
use crate::promotions::PromoCode;
use crate::storage::{self, Storage, keys};

#[derive(Debug, Default)]
struct CartState {
    items: Vec<LineItem>,
    /// Drawer visibility.
    open: bool,
    /// Line awaiting a remove confirmation.
    pending_removal: Option<VariantKey>,
}

/// The cart store.
#[derive(Debug)]
pub struct CartStore {
    storage: Arc<dyn Storage>,
    state: RwLock<CartState>,
}

impl CartStore {
    /// Restore the cart from storage.
    ///
    /// Missing or malformed data, including rows that break the cart
    /// invariants, yields an empty cart.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let items = validate(storage::load_collection(storage.as_ref(), keys::CART));
        debug!(lines = items.len(), "Cart restored");

        Self {
            storage,
            state: RwLock::new(CartState {
                items,
                ..CartState::default()
            }),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` of `product` in `size`.
    ///
    /// Merges into the existing line for the same product and size, otherwise
    /// appends a new line. Opens the cart drawer. Adding zero is a no-op.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&self, product: &ProductSnapshot, size: Size, quantity: u32) {
        if quantity == 0 {
            debug!("Ignoring add of zero quantity");
            return;
        }

        let key = VariantKey::new(&product.id, &size);
        self.mutate(|state| {
            if let Some(line) = state.items.iter_mut().find(|line| line.variant_key == key) {
                line.quantity = line.quantity.saturating_add(quantity);
                debug!(variant = %key, quantity = line.quantity, "Merged into existing line");
            } else {
                state.items.push(LineItem::new(product, size, quantity));
                debug!(variant = %key, quantity, "Appended new line");
            }
            state.open = true;
        });
    }

    /// Remove the line for `key`. Absent keys are ignored.
    #[instrument(skip(self))]
    pub fn remove_item(&self, key: &VariantKey) {
        self.mutate(|state| {
            state.items.retain(|line| &line.variant_key != key);
            if state.pending_removal.as_ref() == Some(key) {
                state.pending_removal = None;
            }
        });
    }

    /// Set the quantity of the line for `key`.
    ///
    /// Zero or negative removes the line. Absent keys are ignored.
    #[instrument(skip(self))]
    pub fn set_quantity(&self, key: &VariantKey, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.mutate(|state| {
            if let Some(line) = state.items.iter_mut().find(|line| &line.variant_key == key) {
                line.quantity = quantity;
            }
        });
    }

    /// Empty the cart and drop its persisted entry.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        let mut state = self.write();
        state.items.clear();
        state.pending_removal = None;
        storage::forget(self.storage.as_ref(), keys::CART);
        debug!("Cart cleared");
    }

    /// Open or close the cart drawer.
    pub fn set_open(&self, open: bool) {
        self.write().open = open;
    }

    // =========================================================================
    // Remove confirmation
    // =========================================================================

    /// Ask to remove the line for `key`.
    ///
    /// Returns the line's product name for the confirmation prompt, or `None`
    /// (and records nothing) if the line does not exist.
    pub fn request_removal(&self, key: &VariantKey) -> Option<String> {
        let mut state = self.write();
        let name = state
            .items
            .iter()
            .find(|line| &line.variant_key == key)
            .map(|line| line.name.clone())?;
        state.pending_removal = Some(key.clone());
        Some(name)
    }

    /// Remove the line awaiting confirmation, if any.
    ///
    /// Returns whether a pending removal was applied.
    pub fn confirm_removal(&self) -> bool {
        let pending = self.write().pending_removal.take();
        if let Some(key) = pending {
            self.remove_item(&key);
            true
        } else {
            false
        }
    }

    /// Drop the pending removal without touching the cart.
    pub fn cancel_removal(&self) {
        self.write().pending_removal = None;
    }

    /// The key awaiting a remove confirmation.
    #[must_use]
    pub fn pending_removal(&self) -> Option<VariantKey> {
        self.read().pending_removal.clone()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of the line items in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.read().items.clone()
    }

    /// The line for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &VariantKey) -> Option<LineItem> {
        self.read()
            .items
            .iter()
            .find(|line| &line.variant_key == key)
            .cloned()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.read()
            .items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of `unit_price × quantity` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.read().items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.read().open
    }

    /// Checkout totals for the current lines, with an optional promo applied.
    #[must_use]
    pub fn summary(&self, promo: Option<&PromoCode>) -> CheckoutSummary {
        CheckoutSummary::compute(&self.read().items, promo)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Apply `f` and write the lines through while still holding the lock,
    /// so stored order matches mutation order.
    fn mutate(&self, f: impl FnOnce(&mut CartState)) {
        let mut state = self.write();
        f(&mut state);
        storage::persist(self.storage.as_ref(), keys::CART, &state.items);
    }

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reject a restored cart that breaks the line invariants.
fn validate(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let valid = items
        .iter()
        .all(|line| line.is_well_formed() && seen.insert(line.variant_key.clone()));

    if valid {
        items
    } else {
        warn!("Discarding persisted cart with invalid lines");
        Vec::new()
    }
}
