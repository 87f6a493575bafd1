//! Domain models shared by the stores.

pub mod line_item;
pub mod route;
pub mod user;

pub use line_item::LineItem;
pub use route::Route;
pub use user::AuthUser;
