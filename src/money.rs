use crate::error::VendoError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A non-negative monetary price for a catalog entry.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for monetary calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, VendoError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(VendoError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = VendoError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<Price> for Balance {
    fn from(price: Price) -> Self {
        Self(price.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// The running total of funds currently held by a machine or ledger.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whether this balance can pay for `price` in full.
    pub fn covers(&self, price: Price) -> bool {
        price.0 <= self.0
    }
}

// Basic arithmetic so Balance works as a value object in the ledger math.
impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_validation() {
        assert!(Price::new(dec!(1.50)).is_ok());
        assert!(Price::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Price::new(dec!(-0.01)),
            Err(VendoError::ValidationError(_))
        ));
    }

    #[test]
    fn test_balance_arithmetic() {
        let b1 = Balance::new(dec!(2.0));
        let b2 = Balance::new(dec!(0.5));
        assert_eq!(b1 + b2, Balance::new(dec!(2.5)));
        assert_eq!(b1 - b2, Balance::new(dec!(1.5)));
    }

    #[test]
    fn test_balance_covers_price() {
        let balance = Balance::new(dec!(1.50));
        assert!(balance.covers(Price::new(dec!(1.50)).unwrap()));
        assert!(balance.covers(Price::new(dec!(1.00)).unwrap()));
        assert!(!balance.covers(Price::new(dec!(1.51)).unwrap()));
    }

    #[test]
    fn test_display_formats_two_decimals() {
        assert_eq!(Price::new(dec!(1.5)).unwrap().to_string(), "$1.50");
        assert_eq!(Balance::new(dec!(0)).to_string(), "$0.00");
    }
}
