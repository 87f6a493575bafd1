//! Wishlist of favourited products, keyed by product id.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dripstore_core::{ProductId, ProductSnapshot};
use tracing::{debug, instrument, warn};

use crate::storage::{self, Storage, keys};

/// The wishlist store.
///
/// Entries keep the order they were added in. Ids are unique.
#[derive(Debug)]
pub struct WishlistStore {
    storage: Arc<dyn Storage>,
    items: RwLock<Vec<ProductSnapshot>>,
}

impl WishlistStore {
    /// Restore the wishlist from storage.
    ///
    /// Missing or malformed data, or a payload with duplicate ids, yields an
    /// empty wishlist.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let mut items: Vec<ProductSnapshot> =
            storage::load_collection(storage.as_ref(), keys::WISHLIST);

        let mut seen = HashSet::with_capacity(items.len());
        if !items.iter().all(|item| seen.insert(item.id.clone())) {
            warn!("Discarding persisted wishlist with duplicate products");
            items.clear();
        }
        debug!(entries = items.len(), "Wishlist restored");

        Self {
            storage,
            items: RwLock::new(items),
        }
    }

    /// Add a product unless one with the same id is already present.
    ///
    /// Returns whether the product was inserted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&self, product: &ProductSnapshot) -> bool {
        let mut items = self.write();
        if items.iter().any(|item| item.id == product.id) {
            return false;
        }
        items.push(product.clone());
        storage::persist(self.storage.as_ref(), keys::WISHLIST, &items);
        true
    }

    /// Remove the product with `id`.
    ///
    /// Returns whether anything was removed; absent ids are a no-op.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &ProductId) -> bool {
        let mut items = self.write();
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return false;
        }
        storage::persist(self.storage.as_ref(), keys::WISHLIST, &items);
        true
    }

    /// Remove the product if present, add it otherwise.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&self, product: &ProductSnapshot) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    /// Whether a product with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.read().iter().any(|item| &item.id == id)
    }

    /// Snapshot of the entries in the order they were added.
    #[must_use]
    pub fn items(&self) -> Vec<ProductSnapshot> {
        self.read().clone()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ProductSnapshot>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ProductSnapshot>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dripstore_core::Price;

    use super::*;
    use crate::storage::MemoryStorage;

    fn product(id: &str) -> ProductSnapshot {
        ProductSnapshot::new(id, "Cargo Pants", Price::from_cents(5500), "pants.jpg")
            .with_description("Baggy fit")
    }

    fn empty_wishlist() -> (Arc<MemoryStorage>, WishlistStore) {
        let storage = Arc::new(MemoryStorage::new());
        let wishlist = WishlistStore::load(storage.clone());
        (storage, wishlist)
    }

    #[test]
    fn test_add_is_idempotent() {
        let (_, wishlist) = empty_wishlist();
        assert!(wishlist.add(&product("p1")));
        assert!(!wishlist.add(&product("p1")));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductId::new("p1")));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (_, wishlist) = empty_wishlist();
        wishlist.add(&product("p1"));

        assert!(!wishlist.remove(&ProductId::new("p2")));
        assert_eq!(wishlist.items(), vec![product("p1")]);
    }

    #[test]
    fn test_remove_present() {
        let (_, wishlist) = empty_wishlist();
        wishlist.add(&product("p1"));
        wishlist.add(&product("p2"));

        assert!(wishlist.remove(&ProductId::new("p1")));
        assert!(!wishlist.contains(&ProductId::new("p1")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let (_, wishlist) = empty_wishlist();
        assert!(wishlist.toggle(&product("p1")));
        assert!(!wishlist.toggle(&product("p1")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_persists_and_restores() {
        let (storage, wishlist) = empty_wishlist();
        wishlist.add(&product("p2"));
        wishlist.add(&product("p1"));
        wishlist.remove(&ProductId::new("p2"));

        let restored = WishlistStore::load(storage);
        assert_eq!(restored.items(), vec![product("p1")]);
    }

    #[test]
    fn test_concurrent_changes_persist_in_order() {
        let storage = Arc::new(MemoryStorage::new());
        let wishlist = WishlistStore::load(storage.clone());

        std::thread::scope(|scope| {
            for thread in 0..4 {
                let wishlist = &wishlist;
                scope.spawn(move || {
                    for n in 0..25 {
                        let item = product(&format!("t{thread}-{n}"));
                        wishlist.add(&item);
                        if n % 2 == 0 {
                            wishlist.remove(&item.id);
                        }
                    }
                });
            }
        });

        let restored = WishlistStore::load(storage);
        assert_eq!(wishlist.len(), 48);
        assert_eq!(restored.items(), wishlist.items());
    }

    #[test]
    fn test_duplicate_ids_in_storage_load_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let raw = serde_json::to_string(&[product("p1"), product("p1")]).unwrap();
        storage.set(keys::WISHLIST, &raw).unwrap();

        assert!(WishlistStore::load(storage).is_empty());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::WISHLIST, r#"[{"id": 5}]"#).unwrap();
        assert!(WishlistStore::load(storage).is_empty());
    }
}
