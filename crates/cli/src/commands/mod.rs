//! Subcommand implementations.
//!
//! Each command works against an [`AppState`] and prints the state it
//! changed. The latest notification, if still visible, goes to stderr.

use dripstore_storefront::state::AppState;
use dripstore_storefront::stores::NotificationKind;

pub mod account;
pub mod cart;
pub mod promo;
pub mod wishlist;

/// Echo the visible notification, the terminal's stand-in for a toast.
pub fn report_notification(state: &AppState) {
    let notification = state.notifications().current();
    if !notification.visible {
        return;
    }
    let marker = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
    };
    eprintln!("{marker} {}", notification.message);
}
