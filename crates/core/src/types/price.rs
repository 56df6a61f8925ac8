//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Catalog prices are always non-negative; the catalog store rejects drafts
/// that would produce a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
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

    /// Create a price in Brazilian reais.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BRL)
    }

    /// Create a BRL price from an amount in centavos.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::brl(Decimal::new(cents, 2))
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Percentage saved when moving from `original` down to this price,
    /// rounded to the nearest whole percent.
    ///
    /// Returns `None` when `original` is not strictly higher.
    #[must_use]
    pub fn discount_from(&self, original: &Self) -> Option<u32> {
        if original.amount <= self.amount || original.amount.is_zero() {
            return None;
        }
        let ratio = (original.amount - self.amount) / original.amount * Decimal::ONE_HUNDRED;
        let rounded = ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.to_u32()
    }
}

impl fmt::Display for Price {
    /// Formats as the storefront shows prices, e.g. `R$ 18,90`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{amount:.2}").replace('.', ",");
        write!(f, "{} {text}", self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_comma_separator() {
        assert_eq!(Price::from_cents(1890).to_string(), "R$ 18,90");
        assert_eq!(Price::from_cents(450).to_string(), "R$ 4,50");
        assert_eq!(Price::from_cents(0).to_string(), "R$ 0,00");
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-100).is_negative());
        assert!(!Price::from_cents(0).is_negative());
        assert!(!Price::from_cents(1).is_negative());
    }

    #[test]
    fn test_discount_from() {
        let price = Price::from_cents(220);
        let original = Price::from_cents(350);
        assert_eq!(price.discount_from(&original), Some(37));

        assert_eq!(original.discount_from(&price), None);
        assert_eq!(price.discount_from(&price), None);
    }
}
