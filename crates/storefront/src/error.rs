//! Unified error type for the composition root.
//!
//! Store operations themselves never fail: missing keys are no-ops and
//! storage trouble degrades to empty state. What can fail is startup
//! (configuration, opening storage) and the user-facing flows that reject
//! input (auth, promo codes). `AppError` gathers those for callers that
//! drive the whole storefront.

use thiserror::Error;

use crate::config::ConfigError;
use crate::promotions::PromoError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Login or signup was rejected.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Promo code was not recognised.
    #[error("Promo error: {0}")]
    Promo(#[from] PromoError),

    /// Bad input from the presentation layer.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the user can fix this by changing their input and retrying.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Promo(_) | Self::BadRequest(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_recoverable() {
        assert!(AppError::from(AuthError::MissingFields).is_recoverable());
        assert!(AppError::from(PromoError::UnknownCode("X".into())).is_recoverable());
        assert!(
            !AppError::from(ConfigError::InvalidEnvVar("K".into(), "bad".into())).is_recoverable()
        );
    }

    #[test]
    fn test_display_wraps_source() {
        let err = AppError::from(AuthError::WeakPassword { min: 6 });
        assert_eq!(
            err.to_string(),
            "Auth error: password must be at least 6 characters"
        );
    }
}
