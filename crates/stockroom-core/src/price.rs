//! # Price Module
//!
//! Provides the `Price` type for handling product prices safely.
//!
//! ## Why Integer Prices?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "29.99" on the wire ⇄ 2999 cents in Rust and in SQLite              │
//! │    The decimal string exists ONLY at the JSON boundary                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Contract
//! The JSON representation is a decimal string with exactly two fractional
//! digits (`"29.99"`). On input, up to two fractional digits are accepted
//! (`"30"`, `"29.9"`, `"29.99"`); more than two fractional digits or more
//! than [`MAX_PRICE_DIGITS`](crate::MAX_PRICE_DIGITS) digits in total are
//! rejected, as are negative values.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::price::Price;
//!
//! let price = Price::parse("29.99").unwrap();
//! assert_eq!(price.cents(), 2999);
//!
//! // NEVER do this:
//! // let bad = Price::from_float(29.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_PRICE_DIGITS;

/// Maximum integer digits: total digits minus the two fractional digits.
const MAX_INTEGER_DIGITS: u32 = MAX_PRICE_DIGITS - 2;

// =============================================================================
// Price Type
// =============================================================================

/// A product price in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: No floating point anywhere in the system
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **String on the wire**: serde (de)serializes through the decimal string
///   form, so JSON consumers never see raw cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    ///
    /// let price = Price::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Parses a wire-format decimal string into a Price.
    ///
    /// ## Rules
    /// - Must not be empty
    /// - Must be non-negative
    /// - Optional fractional part of 1 or 2 digits
    /// - At most 10 digits in total (8 integer + 2 fractional)
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    ///
    /// assert_eq!(Price::parse("29.99").unwrap().cents(), 2999);
    /// assert_eq!(Price::parse("30").unwrap().cents(), 3000);
    /// assert_eq!(Price::parse("29.9").unwrap().cents(), 2990);
    ///
    /// assert!(Price::parse("29.999").is_err()); // 3 decimal places
    /// assert!(Price::parse("-1.00").is_err());  // negative
    /// assert!(Price::parse("123456789.00").is_err()); // 11 digits total
    /// ```
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::Required { field: "price" });
        }

        if let Some(rest) = input.strip_prefix('-') {
            // Distinguish "-12.00" (negative) from junk like "-abc"
            if rest.chars().any(|c| c.is_ascii_digit()) {
                return Err(ValidationError::Negative { field: "price" });
            }
            return Err(invalid_number());
        }

        let (int_part, frac_part) = match input.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (input, None),
        };

        if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid_number());
        }

        let frac_cents = match frac_part {
            None | Some("") => 0,
            Some(f) => {
                if !f.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid_number());
                }
                if f.len() > 2 {
                    return Err(ValidationError::InvalidFormat {
                        field: "price",
                        reason: "ensure that there are no more than 2 decimal places."
                            .to_string(),
                    });
                }
                // "9" means 90 cents, "99" means 99 cents
                let digits: i64 = f.parse().unwrap_or(0);
                if f.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        // Count integer digits without leading zeros ("0.99" is 3 chars but
        // only 1 significant integer digit).
        let significant = int_part.trim_start_matches('0');
        if significant.len() as u32 > MAX_INTEGER_DIGITS {
            return Err(too_many_digits());
        }

        // Safe: at most 8 significant digits, fits comfortably in i64
        let int_value: i64 = if significant.is_empty() {
            0
        } else {
            significant.parse().map_err(|_| too_many_digits())?
        };

        Ok(Price(int_value * 100 + frac_cents))
    }
}

fn invalid_number() -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price",
        reason: "a valid number is required.".to_string(),
    }
}

fn too_many_digits() -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price",
        reason: format!(
            "ensure that there are no more than {} digits in total.",
            MAX_PRICE_DIGITS
        ),
    }
}

// =============================================================================
// Display / Serde - the wire form
// =============================================================================

impl fmt::Display for Price {
    /// Formats as the canonical wire string with exactly 2 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Price::parse(&raw).map_err(D::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_decimals() {
        assert_eq!(Price::parse("29.99").unwrap().cents(), 2999);
        assert_eq!(Price::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Price::parse("30").unwrap().cents(), 3000);
        assert_eq!(Price::parse("29.9").unwrap().cents(), 2990);
        assert_eq!(Price::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_three_decimals() {
        let err = Price::parse("0.005").unwrap_err();
        assert_eq!(err.field(), "price");
        assert!(err.to_string().contains("2 decimal places"));
    }

    #[test]
    fn test_parse_rejects_too_many_digits() {
        // 9 integer digits + 2 fractional = 11 total
        assert!(Price::parse("123456789.00").is_err());
        // 8 integer digits + 2 fractional = 10 total, the maximum
        assert_eq!(
            Price::parse("12345678.90").unwrap().cents(),
            1_234_567_890
        );
    }

    #[test]
    fn test_parse_ignores_leading_zeros_for_digit_count() {
        assert_eq!(Price::parse("00000000012.00").unwrap().cents(), 1200);
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = Price::parse("-1.00").unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "price" }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Price::parse("").is_err());
        assert!(Price::parse("abc").is_err());
        assert!(Price::parse("1.2.3").is_err());
        assert!(Price::parse(".99").is_err());
        assert!(Price::parse("1,99").is_err());
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Price::from_cents(2999).to_string(), "29.99");
        assert_eq!(Price::from_cents(3000).to_string(), "30.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::parse("29.99").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"29.99\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
