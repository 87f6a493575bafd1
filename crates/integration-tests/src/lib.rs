//! Integration tests for Dripstore.
//!
//! The tests drive a whole [`AppState`] the way the presentation layer
//! does, against in-memory or on-disk storage.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dripstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - cart flows, removal confirmation and checkout totals
//! - `auth_flow` - simulated login/signup and their notifications
//! - `persistence` - restoring and discarding stored cart and wishlist data
//!
//! [`AppState`]: dripstore_storefront::state::AppState

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use dripstore_core::{Price, ProductSnapshot};
use dripstore_storefront::config::StorefrontConfig;
use dripstore_storefront::state::AppState;

/// Config with the default timings and a data directory at `dir`.
#[must_use]
pub fn config_in(dir: &std::path::Path) -> StorefrontConfig {
    StorefrontConfig {
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    }
}

/// In-memory state with no auth delay.
#[must_use]
pub fn instant_state() -> AppState {
    AppState::in_memory(StorefrontConfig {
        auth_delay: Duration::ZERO,
        ..StorefrontConfig::default()
    })
}

/// A product priced in whole cents.
#[must_use]
pub fn product(id: &str, name: &str, cents: i64) -> ProductSnapshot {
    ProductSnapshot::new(id, name, Price::from_cents(cents), format!("{id}.jpg"))
}
