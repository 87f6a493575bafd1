//! Promo codes and the flash-sale countdown.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from promo code lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromoError {
    #[error("unknown promo code: {0}")]
    UnknownCode(String),
}

/// A percentage-off promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCode {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub percent_off: u8,
}

static CATALOG: [PromoCode; 2] = [
    PromoCode {
        code: "NEWDRIP20",
        title: "New Customer Special",
        description: "First-time customers get an extra special discount!",
        percent_off: 20,
    },
    PromoCode {
        code: "WEEKEND15",
        title: "Weekend Special",
        description: "Limited weekend offer - Ends soon!",
        percent_off: 15,
    },
];

impl PromoCode {
    /// Every code currently on offer.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &CATALOG
    }

    /// Find a code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `PromoError::UnknownCode` if no code matches.
    pub fn lookup(code: &str) -> Result<&'static Self, PromoError> {
        let wanted = code.trim();
        CATALOG
            .iter()
            .find(|promo| promo.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PromoError::UnknownCode(wanted.to_owned()))
    }
}

/// Time left on a countdown, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// A sale that ends at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleCountdown {
    pub ends_at: DateTime<Utc>,
}

impl SaleCountdown {
    /// A sale running for `duration` from `now`.
    #[must_use]
    pub fn starting_at(now: DateTime<Utc>, duration: chrono::Duration) -> Self {
        Self {
            ends_at: now + duration,
        }
    }

    /// Time left at `now`, zero once the sale is over.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Remaining {
        let total = (self.ends_at - now).num_seconds().max(0);
        Remaining {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    /// Whether the sale has ended at `now`.
    #[must_use]
    pub fn is_over(&self, now: DateTime<Utc>) -> bool {
        now >= self.ends_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(PromoCode::lookup(" newdrip20 ").unwrap().percent_off, 20);
        assert_eq!(PromoCode::lookup("WEEKEND15").unwrap().percent_off, 15);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            PromoCode::lookup("FREESTUFF"),
            Err(PromoError::UnknownCode("FREESTUFF".to_string()))
        );
    }

    #[test]
    fn test_catalog() {
        let codes: Vec<_> = PromoCode::all().iter().map(|p| p.code).collect();
        assert_eq!(codes, ["NEWDRIP20", "WEEKEND15"]);
    }

    #[test]
    fn test_countdown_splits_remaining_time() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let sale = SaleCountdown::starting_at(start, chrono::Duration::days(3));

        assert_eq!(
            sale.remaining(start),
            Remaining {
                days: 3,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );

        let later = start + chrono::Duration::seconds(90_061);
        assert_eq!(
            sale.remaining(later),
            Remaining {
                days: 1,
                hours: 22,
                minutes: 58,
                seconds: 59
            }
        );
        assert!(!sale.is_over(later));
    }

    #[test]
    fn test_countdown_saturates_after_end() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let sale = SaleCountdown::starting_at(start, chrono::Duration::hours(1));
        let after = start + chrono::Duration::hours(2);

        assert_eq!(sale.remaining(after), Remaining::default());
        assert!(sale.is_over(after));
    }
}
