//! Dripstore Core - Shared types library.
//!
//! This crate provides common types used across all Dripstore components:
//! - `storefront` - Cart, wishlist, notification and auth stores
//! - `cli` - The `drip` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, sizes and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
