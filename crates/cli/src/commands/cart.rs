//! Cart commands.

use dripstore_core::{ProductSnapshot, Size, VariantKey};
use dripstore_storefront::error::AppError;
use dripstore_storefront::promotions::PromoCode;
use dripstore_storefront::state::AppState;

/// Add `quantity` of `product` in `size` and print the cart.
pub fn add(state: &AppState, product: ProductSnapshot, size: &str, quantity: u32) {
    state.cart().add_item(&product, Size::new(size), quantity);
    print_cart(state, None);
}

/// Remove a line and print the cart.
pub fn remove(state: &AppState, key: &str) {
    state.cart().remove_item(&VariantKey::from(key));
    print_cart(state, None);
}

/// Set a line's quantity and print the cart.
pub fn set_quantity(state: &AppState, key: &str, quantity: i64) {
    state.cart().set_quantity(&VariantKey::from(key), quantity);
    print_cart(state, None);
}

/// Empty the cart.
pub fn clear(state: &AppState) {
    state.cart().clear();
    println!("Cart cleared.");
}

/// Print the cart, applying `promo` to the summary if given.
///
/// # Errors
///
/// Returns `AppError::Promo` if the promo code is unknown.
pub fn show(state: &AppState, promo: Option<&str>) -> Result<(), AppError> {
    let promo = promo.map(PromoCode::lookup).transpose()?;
    print_cart(state, promo);
    Ok(())
}

fn print_cart(state: &AppState, promo: Option<&PromoCode>) {
    let cart = state.cart();
    let currency = state.config().currency;

    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in cart.items() {
        println!(
            "{:<16} {:<24} {:>4} x {:>10} = {:>10}",
            line.variant_key,
            line.name,
            line.quantity,
            line.unit_price.display(currency),
            line.line_total().display(currency),
        );
    }

    let summary = cart.summary(promo);
    println!("Items:    {}", summary.item_count);
    println!("Subtotal: {}", summary.subtotal.display(currency));
    if let Some(code) = summary.promo_code {
        println!("Discount: -{} ({code})", summary.discount.display(currency));
    }
    println!("Total:    {}", summary.total.display(currency));
}
