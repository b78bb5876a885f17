//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Prices cannot be negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative decimal price in the store's currency.
///
/// Serialized as a decimal string on the wire (e.g. `"9.99"`), never as a
/// binary float.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let negative = Decimal::new(-150, 2);
        assert_eq!(Price::new(negative), Err(PriceError::Negative(negative)));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
        let amount = Decimal::new(999, 2);
        assert_eq!(Price::new(amount).unwrap().amount(), amount);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Decimal::new(999, 2), Decimal::new(1, 2)]
            .into_iter()
            .map(|d| Price::new(d).unwrap())
            .sum();
        assert_eq!(total.amount(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(Decimal::new(99, 1)).unwrap().to_string(), "$9.90");
    }

    #[test]
    fn test_serde_decimal_string() {
        let price: Price = serde_json::from_str("\"9.99\"").unwrap();
        assert_eq!(price.amount(), Decimal::new(999, 2));
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"9.99\"");
    }
}
