//! Application state shared by the presentation layer.

use std::sync::Arc;

use chrono::Utc;

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::promotions::SaleCountdown;
use crate::services::auth::AuthService;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::stores::{CartStore, NotificationStore, WishlistStore};

/// Every store, constructed once at startup.
///
/// This struct is cheaply cloneable via `Arc`. Build one per process (or
/// per test) and pass it to whatever needs the stores.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    wishlist: WishlistStore,
    notifications: NotificationStore,
    auth: AuthService,
    sale: SaleCountdown,
}

impl AppState {
    /// Create application state over `storage`.
    ///
    /// Cart and wishlist are restored from storage; the user starts signed
    /// out and the sale countdown starts now.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let notifications = NotificationStore::new(config.notification_timeout);
        let auth = AuthService::new(notifications.clone(), config.auth_delay);
        let cart = CartStore::load(Arc::clone(&storage));
        let wishlist = WishlistStore::load(storage);
        let sale = SaleCountdown::starting_at(Utc::now(), config.sale_duration);

        tracing::info!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "Storefront state initialized"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                wishlist,
                notifications,
                auth,
                sale,
            }),
        }
    }

    /// Create application state persisted under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if `config.data_dir` is not a directory.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.data_dir)?;
        Ok(Self::new(config, Arc::new(storage)))
    }

    /// Create application state that persists nothing beyond this process.
    #[must_use]
    pub fn in_memory(config: StorefrontConfig) -> Self {
        Self::new(config, Arc::new(MemoryStorage::new()))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the wishlist store.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.inner.wishlist
    }

    /// Get a reference to the notification store.
    #[must_use]
    pub fn notifications(&self) -> &NotificationStore {
        &self.inner.notifications
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get the flash sale countdown.
    #[must_use]
    pub fn sale(&self) -> &SaleCountdown {
        &self.inner.sale
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dripstore_core::{Price, ProductSnapshot, Size};

    use super::*;

    #[test]
    fn test_clones_share_stores() {
        let state = AppState::in_memory(StorefrontConfig::default());
        let other = state.clone();

        let tee = ProductSnapshot::new("p1", "Tee", Price::from_cents(2000), "tee.jpg");
        state.cart().add_item(&tee, Size::default(), 1);
        other.wishlist().add(&tee);

        assert_eq!(other.cart().total_items(), 1);
        assert!(state.wishlist().contains(&tee.id));
    }

    #[test]
    fn test_isolated_instances() {
        let a = AppState::in_memory(StorefrontConfig::default());
        let b = AppState::in_memory(StorefrontConfig::default());

        let tee = ProductSnapshot::new("p1", "Tee", Price::from_cents(2000), "tee.jpg");
        a.cart().add_item(&tee, Size::default(), 1);
        assert!(b.cart().is_empty());
    }

    #[test]
    fn test_open_without_writes_leaves_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().join("data"),
            ..StorefrontConfig::default()
        };

        let state = AppState::open(config.clone()).unwrap();
        assert!(state.cart().is_empty());
        assert!(!config.data_dir.exists());

        let tee = ProductSnapshot::new("p1", "Tee", Price::from_cents(2000), "tee.jpg");
        state.wishlist().add(&tee);
        assert!(config.data_dir.join("wishlist.json").exists());
    }

    #[test]
    fn test_open_restores_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };

        let tee = ProductSnapshot::new("p1", "Tee", Price::from_cents(2000), "tee.jpg");
        {
            let state = AppState::open(config.clone()).unwrap();
            state.cart().add_item(&tee, Size::new("L"), 2);
            state.wishlist().add(&tee);
        }

        let state = AppState::open(config).unwrap();
        assert_eq!(state.cart().total_price(), Price::from_cents(4000));
        assert!(state.wishlist().contains(&tee.id));
        assert!(!state.auth().is_authenticated());
    }
}
