//! Product snapshots, sizes and cart variant keys.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Merchandising badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Trending,
    New,
    AlmostGone,
}

impl Badge {
    /// Card label for the badge.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Trending => "🔥 Trending",
            Self::New => "✨ NEW",
            Self::AlmostGone => "💀 Almost Gone",
        }
    }
}

/// Error returned when parsing an unknown badge name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown badge: {0} (expected trending, new or almost-gone)")]
pub struct BadgeError(String);

impl FromStr for Badge {
    type Err = BadgeError;

    /// Parse the serialized name, e.g. `almost-gone`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trending" => Ok(Self::Trending),
            "new" => Ok(Self::New),
            "almost-gone" => Ok(Self::AlmostGone),
            _ => Err(BadgeError(s.to_owned())),
        }
    }
}

/// A point-in-time copy of a catalog product.
///
/// The wishlist stores these directly; the cart copies the fields it needs
/// into a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl ProductSnapshot {
    /// Create a snapshot with an empty description and no badge.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: String::new(),
            badge: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the badge.
    #[must_use]
    pub const fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// A garment size as selected on the product page.
///
/// Sizes are free-form labels; [`Size::STANDARD`] lists the ones the
/// catalog offers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Sizes offered by the size selector, smallest first.
    pub const STANDARD: [&'static str; 4] = ["S", "M", "L", "XL"];

    /// Create a size label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The size label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new("M")
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Size {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Key identifying one cart row: `<product id>_<size>`.
///
/// ```
/// use dripstore_core::{ProductId, Size, VariantKey};
///
/// let key = VariantKey::new(&ProductId::new("p1"), &Size::new("M"));
/// assert_eq!(key.as_str(), "p1_M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    /// Derive the key for a product in a given size.
    #[must_use]
    pub fn new(product_id: &ProductId, size: &Size) -> Self {
        Self(format!("{product_id}_{size}"))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
