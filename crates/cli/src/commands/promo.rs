//! Promotions commands.

use chrono::Utc;
use dripstore_storefront::promotions::PromoCode;
use dripstore_storefront::state::AppState;

/// Print every promo code.
pub fn list() {
    for promo in PromoCode::all() {
        println!(
            "{:<10} {:>3}% OFF  {} - {}",
            promo.code, promo.percent_off, promo.title, promo.description
        );
    }
}

/// Print time left on the flash sale.
pub fn sale(state: &AppState) {
    let now = Utc::now();
    let sale = state.sale();
    if sale.is_over(now) {
        println!("The sale has ended.");
        return;
    }

    let left = sale.remaining(now);
    println!(
        "Flash sale ends in {}d : {}h : {}m : {}s",
        left.days, left.hours, left.minutes, left.seconds
    );
}
