//! Wishlist commands.

use dripstore_core::{ProductId, ProductSnapshot};
use dripstore_storefront::state::AppState;

/// Add a product and print the wishlist.
pub fn add(state: &AppState, product: ProductSnapshot) {
    if !state.wishlist().add(&product) {
        println!("{} is already on your wishlist.", product.name);
    }
    show(state);
}

/// Remove a product and print the wishlist.
pub fn remove(state: &AppState, id: &str) {
    state.wishlist().remove(&ProductId::new(id));
    show(state);
}

/// Print the wishlist.
pub fn show(state: &AppState) {
    let items = state.wishlist().items();
    if items.is_empty() {
        println!("Your wishlist is empty. Start adding items you love!");
        return;
    }

    let currency = state.config().currency;
    println!("My Wishlist ({} items)", items.len());
    for item in items {
        let badge = item.badge.map_or("", |badge| badge.label());
        println!(
            "{:<12} {:<24} {:>10}  {badge}",
            item.id,
            item.name,
            item.price.display(currency)
        );
    }
}
