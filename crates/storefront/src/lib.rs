//! Dripstore Storefront library.
//!
//! The state layer behind the storefront UI: cart, wishlist, notification
//! and (simulated) authentication stores, plus the promotions and checkout
//! math that read from them.
//!
//! # Architecture
//!
//! There are no ambient singletons. [`state::AppState`] is built once by the
//! composition root (the `drip` CLI, or a test) and handed to whatever needs
//! the stores. Cart and wishlist persist through a [`storage::Storage`]
//! implementation; notifications and the signed-in user live in memory only.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`storage`] - Key-value persistence and the lenient collection loader
//! - [`stores`] - Cart, wishlist and notification stores
//! - [`services`] - The simulated auth service
//! - [`promotions`] - Promo codes and the sale countdown
//! - [`checkout`] - Order summary with discounts applied

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod promotions;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
