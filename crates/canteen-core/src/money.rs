//! # Money Module
//!
//! Provides the `Money` type for prices, salaries and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles:                                                          │
//! │    3 × 2.50 + 1 × 0.10 = 7.6000000000000005  ❌                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 250 + 1 × 10 = 760 cents → "$7.60"                               │
//! │                                                                         │
//! │  Files store decimals ("2.50"); everything in memory is cents.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use canteen_core::money::Money;
//!
//! let price: Money = "2.5".parse().unwrap();
//! assert_eq!(price.cents(), 250);
//!
//! let line = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line.to_string(), "$7.50");
//! assert_eq!(line.to_decimal_string(), "7.50");
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// inv.csv price ──► InventoryItem.unit_price ──► quantity × price ──► order total
/// employee_details.csv salary ──► EmployeeRecord.salary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by an ordered quantity.
    ///
    /// Returns `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Formats the value without a currency symbol, two decimals.
    ///
    /// This is the on-disk form used by the record codec.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Failure to read a decimal amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid amount '{0}'")]
pub struct ParseMoneyError(pub String);

/// Parses decimal text such as `2`, `2.5`, `2.50`, `-3.10` or `.75`.
///
/// Digits past the second decimal place are rounded half-up, so `2.505`
/// becomes 251 cents. Leading/trailing whitespace is ignored. A trailing
/// exponent (`1.5e+06`, the form stream-formatted salaries take) is also read.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError(s.to_string());
        let text = s.trim();

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((m, e)) => (m, parse_exponent(e).ok_or_else(err)?),
            None => (unsigned, 0),
        };

        let (whole, frac) = match mantissa.split_once('.') {
            Some((w, f)) => (w, f),
            None => (mantissa, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(err());
        }

        let (whole, frac) = shift_decimal_point(whole, frac, exponent);
        let (whole, frac) = (whole.as_str(), frac.as_str());

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(err)?
        };

        let digits: Vec<i64> = frac.bytes().map(|b| i64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = whole_cents
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))
            .ok_or_else(err)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Largest exponent accepted; beyond it any nonzero amount overflows cents.
const MAX_EXPONENT: i32 = 20;

/// Reads the digits after `e`, with an optional sign.
fn parse_exponent(text: &str) -> Option<i32> {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let exponent: i32 = text.parse().ok()?;
    (exponent.abs() <= MAX_EXPONENT).then_some(exponent)
}

/// Moves the decimal point of `whole.frac` by `exponent` places.
fn shift_decimal_point(whole: &str, frac: &str, exponent: i32) -> (String, String) {
    if exponent == 0 {
        return (whole.to_string(), frac.to_string());
    }

    let digits = format!("{}{}", whole, frac);
    let point = whole.len() as i64 + i64::from(exponent);

    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        (String::new(), format!("{}{}", zeros, digits))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{}{}", digits, zeros), String::new())
    } else {
        let (w, f) = digits.split_at(point as usize);
        (w.to_string(), f.to_string())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$7.50` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
