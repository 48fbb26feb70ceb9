//! Type-safe price representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Arithmetic helpers keep the currency of `self`; the store runs in a single
/// configured currency so operands always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from minor units (paise, cents).
    #[must_use]
    pub fn from_minor(minor: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(minor, 2), currency_code)
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Sum of two prices, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let amount = self.amount.checked_add(other.amount)?;
        Some(Self::new(amount, self.currency_code))
    }

    /// Difference of two prices, floored at zero.
    #[must_use]
    pub fn saturating_minus(self, other: Self) -> Self {
        let amount = self.amount.saturating_sub(other.amount).max(Decimal::ZERO);
        Self::new(amount, self.currency_code)
    }

    /// Price multiplied by a quantity, or `None` on overflow.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        let amount = self.amount.checked_mul(Decimal::from(quantity))?;
        Some(Self::new(amount, self.currency_code))
    }

    /// The given percentage of this price, rounded to two decimal places.
    ///
    /// `None` if the intermediate product overflows.
    #[must_use]
    pub fn checked_percent(self, percent: Decimal) -> Option<Self> {
        let amount = self
            .amount
            .checked_mul(percent)?
            .checked_div(Decimal::ONE_HUNDRED)?
            .round_dp(2);
        Some(Self::new(amount, self.currency_code))
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn inr(minor: i64) -> Price {
        Price::from_minor(minor, CurrencyCode::INR)
    }

    #[test]
    fn test_display() {
        assert_eq!(inr(129_900).to_string(), "₹1299.00");
        assert_eq!(
            Price::from_minor(550, CurrencyCode::USD).to_string(),
            "$5.50"
        );
    }

    #[test]
    fn test_saturating_minus_floors_at_zero() {
        assert_eq!(inr(10_000).saturating_minus(inr(2_500)), inr(7_500));
        assert!(inr(1_000).saturating_minus(inr(5_000)).is_zero());
    }

    #[test]
    fn test_times_and_add() {
        let total = inr(4_000).checked_times(3).unwrap().checked_add(inr(500));
        assert_eq!(total, Some(inr(12_500)));
    }

    #[test]
    fn test_percent_rounds_to_paise() {
        assert_eq!(inr(33_333).checked_percent(Decimal::new(10, 0)), Some(inr(3_333)));
    }

    #[test]
    fn test_arithmetic_overflow_is_none() {
        let max = Price::new(Decimal::MAX, CurrencyCode::INR);
        assert_eq!(max.checked_percent(Decimal::new(10, 0)), None);
        assert_eq!(max.checked_times(2), None);
        assert_eq!(max.checked_add(inr(100)), None);
        assert_eq!(max.saturating_minus(Price::new(Decimal::MIN, CurrencyCode::INR)), max);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
