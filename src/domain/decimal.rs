//! Lossless decimal numeric type backed by rust_decimal.
//!
//! Volume totals never touch binary floating point; amounts are summed in
//! the chain's smallest unit and converted to this type exactly, once.

use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lossless decimal amount.
///
/// Serializes to a JSON number (not a string) by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number or does
    /// not fit in 96 bits of precision.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Format as a canonical string: no exponent, no trailing zeros.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for s in ["1001", "0.000000000000000001", "123.456", "0"] {
            let decimal = Decimal::from_str_canonical(s).expect("parse failed");
            let reparsed =
                Decimal::from_str_canonical(&decimal.to_canonical_string()).expect("reparse");
            assert_eq!(decimal, reparsed, "roundtrip failed for {}", s);
        }
    }

    #[test]
    fn test_canonical_no_exponent() {
        let decimal = Decimal::from_str_canonical("1000000000000000000").unwrap();
        let formatted = decimal.to_canonical_string();
        assert!(!formatted.contains('e'));
        assert_eq!(formatted, "1000000000000000000");
    }

    #[test]
    fn test_canonical_trims_trailing_zeros() {
        let decimal = Decimal::from_str_canonical("1001.000000000000000000").unwrap();
        assert_eq!(decimal.to_canonical_string(), "1001");
    }

    #[test]
    fn test_zero() {
        assert!(Decimal::zero().is_zero());
        assert_eq!(Decimal::default(), Decimal::zero());
    }

    #[test]
    fn test_json_serializes_as_number() {
        let decimal = Decimal::from_str_canonical("123.456").unwrap();
        let json = serde_json::to_value(decimal).unwrap();
        assert!(json.is_number());
    }

    #[test]
    fn test_two_decimal_formatting() {
        let decimal = Decimal::from_str_canonical("1001").unwrap();
        assert_eq!(format!("{:.2}", decimal.inner()), "1001.00");
    }
}
