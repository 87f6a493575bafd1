//! Cart line items.

use dripstore_core::{Price, ProductId, ProductSnapshot, Size, VariantKey};
use serde::{Deserialize, Serialize};

/// One row of the cart: a product in a particular size.
///
/// Serialized with the field names the storefront has always persisted
/// (`id`, `price`, `variantId`, ...), so carts saved by earlier builds
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub quantity: u32,
    pub image: String,
    pub size: Size,
    #[serde(rename = "variantId")]
    pub variant_key: VariantKey,
}

impl LineItem {
    /// Build a new line for `product` in `size`.
    #[must_use]
    pub fn new(product: &ProductSnapshot, size: Size, quantity: u32) -> Self {
        Self {
            variant_key: VariantKey::new(&product.id, &size),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
            size,
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    /// Whether the row satisfies the cart invariants on its own:
    /// a positive quantity and a key derived from its product and size.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.quantity >= 1 && self.variant_key == VariantKey::new(&self.product_id, &self.size)
    }
}
