//! Cart and wishlist survive a restart; bad stored data does not.

#![allow(clippy::unwrap_used)]

use std::fs;

use dripstore_core::{Badge, Price, Size};
use dripstore_integration_tests::{config_in, product};
use dripstore_storefront::state::AppState;
use serde_json::Value;

#[test]
fn test_cart_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let tee = product("p1", "Boxy Tee", 2000);
    let cap = product("p2", "Dad Cap", 1550);

    let before = {
        let state = AppState::open(config_in(dir.path())).unwrap();
        state.cart().add_item(&tee, Size::new("M"), 2);
        state.cart().add_item(&cap, Size::new("S"), 1);
        state.cart().items()
    };

    let state = AppState::open(config_in(dir.path())).unwrap();
    assert_eq!(state.cart().items(), before);
    assert_eq!(state.cart().total_price(), Price::from_cents(5550));
    // The drawer state is not persisted.
    assert!(!state.cart().is_open());
}

#[test]
fn test_stored_cart_shape() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::open(config_in(dir.path())).unwrap();
    state
        .cart()
        .add_item(&product("p1", "Boxy Tee", 1999), Size::new("XL"), 1);

    let raw = fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    let line = &stored[0];

    assert_eq!(line["id"], "p1");
    assert_eq!(line["variantId"], "p1_XL");
    assert_eq!(line["size"], "XL");
    assert_eq!(line["quantity"], 1);
    assert_eq!(line["price"].as_f64(), Some(19.99));
}

#[test]
fn test_clear_then_restore_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    {
        let state = AppState::open(config_in(dir.path())).unwrap();
        state
            .cart()
            .add_item(&product("p1", "Boxy Tee", 2000), Size::new("M"), 1);
        state.cart().clear();
    }

    let state = AppState::open(config_in(dir.path())).unwrap();
    assert!(state.cart().is_empty());
}

#[test]
fn test_malformed_cart_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart.json"), "{not json").unwrap();

    let state = AppState::open(config_in(dir.path())).unwrap();
    assert!(state.cart().is_empty());
}

#[test]
fn test_legacy_cart_document_loads() {
    let dir = tempfile::tempdir().unwrap();
    let stored = serde_json::json!([{
        "id": "p9",
        "name": "Puffer",
        "price": 120,
        "quantity": 2,
        "image": "puffer.jpg",
        "size": "L",
        "variantId": "p9_L"
    }]);
    fs::write(dir.path().join("cart.json"), stored.to_string()).unwrap();

    let state = AppState::open(config_in(dir.path())).unwrap();
    assert_eq!(state.cart().total_items(), 2);
    assert_eq!(state.cart().total_price(), Price::from_cents(24000));
}

#[test]
fn test_wishlist_round_trips_and_stays_unique() {
    let dir = tempfile::tempdir().unwrap();
    let tee = product("p1", "Boxy Tee", 2000)
        .with_description("Heavyweight cotton")
        .with_badge(Badge::Trending);

    {
        let state = AppState::open(config_in(dir.path())).unwrap();
        assert!(state.wishlist().add(&tee));
        assert!(!state.wishlist().add(&tee));
    }

    let state = AppState::open(config_in(dir.path())).unwrap();
    assert_eq!(state.wishlist().items(), vec![tee.clone()]);
    assert_eq!(state.wishlist().items()[0].badge, Some(Badge::Trending));

    let raw = fs::read_to_string(dir.path().join("wishlist.json")).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["badge"], "trending");

    assert!(!state.wishlist().toggle(&tee));
    assert!(state.wishlist().is_empty());
}
