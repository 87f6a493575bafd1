//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `DRIPSTORE_DATA_DIR` - Directory for persisted cart/wishlist (default: .dripstore)
//! - `DRIPSTORE_NOTIFICATION_TIMEOUT_MS` - Notification auto-hide delay (default: 3000)
//! - `DRIPSTORE_AUTH_DELAY_MS` - Simulated login/signup latency (default: 800)
//! - `DRIPSTORE_CURRENCY` - Display currency: USD, EUR, GBP, CAD, AUD (default: USD)
//! - `DRIPSTORE_SALE_DURATION_HOURS` - Length of the flash sale countdown (default: 72)

use std::path::PathBuf;
use std::time::Duration;

use dripstore_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".dripstore";
const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;
const DEFAULT_AUTH_DELAY_MS: u64 = 800;
const DEFAULT_SALE_DURATION_HOURS: i64 = 72;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding persisted collections
    pub data_dir: PathBuf,
    /// How long a notification stays visible
    pub notification_timeout: Duration,
    /// Artificial latency applied to login and signup
    pub auth_delay: Duration,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// How long the flash sale runs from startup
    pub sale_duration: chrono::Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            notification_timeout: Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            currency: CurrencyCode::default(),
            sale_duration: chrono::Duration::hours(DEFAULT_SALE_DURATION_HOURS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("DRIPSTORE_DATA_DIR", DEFAULT_DATA_DIR));
        let notification_timeout = Duration::from_millis(parse_env_or(
            "DRIPSTORE_NOTIFICATION_TIMEOUT_MS",
            DEFAULT_NOTIFICATION_TIMEOUT_MS,
        )?);
        let auth_delay =
            Duration::from_millis(parse_env_or("DRIPSTORE_AUTH_DELAY_MS", DEFAULT_AUTH_DELAY_MS)?);
        let currency = parse_env_or("DRIPSTORE_CURRENCY", CurrencyCode::default())?;
        let sale_hours = parse_env_or("DRIPSTORE_SALE_DURATION_HOURS", DEFAULT_SALE_DURATION_HOURS)?;
        let sale_duration = chrono::Duration::try_hours(sale_hours).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "DRIPSTORE_SALE_DURATION_HOURS".to_string(),
                format!("{sale_hours} hours is out of range"),
            )
        })?;

        Ok(Self {
            data_dir,
            notification_timeout,
            auth_delay,
            currency,
            sale_duration,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.notification_timeout, Duration::from_secs(3));
        assert_eq!(config.auth_delay, Duration::from_millis(800));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.sale_duration, chrono::Duration::days(3));
    }

    #[test]
    fn test_parse_env_or_falls_back_when_unset() {
        let value: u64 = parse_env_or("DRIPSTORE_TEST_SURELY_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
