//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so cart totals never accumulate
//! floating-point error. On the wire they are plain JSON numbers, matching
//! the shape stored by earlier versions of the storefront.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Sub};
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-currency-tagged amount in the store's standard unit (dollars, not cents).
///
/// ```
/// use dripstore_core::Price;
///
/// let unit = Price::from_cents(1999);
/// assert_eq!(unit.times(3), Price::from_cents(5997));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiply by a quantity (line totals).
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Take a whole-number percentage of this price, rounded to cents.
    ///
    /// Midpoints round away from zero.
    #[must_use]
    pub fn percent(self, percent: u8) -> Self {
        let raw = self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED;
        Self(raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Format for display in the given currency (e.g., "$19.99").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format!("{}{:.2}", currency.symbol(), self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Error returned when parsing an unsupported currency code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(String);

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let lines = [Price::from_cents(2000).times(3), Price::from_cents(1050).times(2)];
        let total: Price = lines.into_iter().sum();
        assert_eq!(total, Price::from_cents(8100));
    }

    #[test]
    fn test_is_negative() {
        assert!("-5".parse::<Price>().unwrap().is_negative());
        assert!(!"-0".parse::<Price>().unwrap().is_negative());
        assert!(!Price::ZERO.is_negative());
        assert!(!Price::from_cents(1).is_negative());
    }

    #[test]
    fn test_percent_rounds_to_cents() {
        // 15% of 33.33 = 4.9995
        assert_eq!(Price::from_cents(3333).percent(15), Price::from_cents(500));
        assert_eq!(Price::from_cents(6000).percent(20), Price::from_cents(1200));
    }

    #[test]
    fn test_display() {
        let price = Price::from_cents(1999);
        assert_eq!(price.display(CurrencyCode::USD), "$19.99");
        assert_eq!(price.display(CurrencyCode::EUR), "€19.99");
        assert_eq!(Price::from_cents(2000).to_string(), "20.00");
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price::from_cents(1999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "19.99");

        let whole: Price = serde_json::from_str("20").unwrap();
        assert_eq!(whole, Price::from_cents(2000));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("gbp".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
