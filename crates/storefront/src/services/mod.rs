//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Simulated login, signup and logout
pub mod auth;
