//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during (simulated) authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email or password was blank.
    #[error("email and password are required")]
    MissingFields,

    /// The password matched the rejected sentinel.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    WeakPassword {
        /// Minimum accepted length.
        min: usize,
    },
}
