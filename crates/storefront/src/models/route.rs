//! Navigation targets.
//!
//! The stores never navigate themselves. The auth service hands back a
//! [`Route`] as a redirect intent and the presentation layer follows it.

use core::fmt;

use dripstore_core::ProductId;

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Shop,
    Product(ProductId),
    Cart,
    Wishlist,
    Profile,
}

impl Route {
    /// Resolve a path such as `/product/p1`. Unknown paths return `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/shop" => Some(Self::Shop),
            "/cart" => Some(Self::Cart),
            "/wishlist" => Some(Self::Wishlist),
            "/profile" => Some(Self::Profile),
            _ => trimmed
                .strip_prefix("/product/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::Product(ProductId::new(id))),
        }
    }

    /// The path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Shop => "/shop".to_string(),
            Self::Product(id) => format!("/product/{id}"),
            Self::Cart => "/cart".to_string(),
            Self::Wishlist => "/wishlist".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
