//! Core types for Dripstore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::*;
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use product::{Badge, BadgeError, ProductSnapshot, Size, VariantKey};
