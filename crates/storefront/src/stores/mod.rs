//! In-process state containers read and written by the presentation layer.

pub mod cart;
pub mod notification;
pub mod wishlist;

pub use cart::CartStore;
pub use notification::{Notification, NotificationKind, NotificationStore};
pub use wishlist::WishlistStore;
