//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    110.0 * (10.0 / 100.0) = 11.000000000000002                          │
//! │    ceil(11.000000000000002) = 12                ❌ WRONG!               │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    110 * 0.10 = 11.00                                                   │
//! │    ceil(11.00) = 11                             ✅                      │
//! │                                                                         │
//! │  Floats only exist at the edge (parsed text); they are converted to    │
//! │  their shortest decimal form before any arithmetic happens.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let bill = Money::from_f64(50.0);
//! let tip = bill.percent_of(Decimal::from(15));
//! assert_eq!(tip, Money::from_f64(7.5));
//! assert_eq!(tip.ceil(), Money::from_f64(8.0));
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// =============================================================================
// Float Conversion
// =============================================================================

/// Converts an `f64` into a `Decimal` without ever failing.
///
/// ## Rules
/// - Finite values use their shortest decimal form (`33.33` → `33.33`)
/// - `NaN` and magnitudes too small to represent → zero
/// - Magnitudes beyond the decimal range (and ±infinity) saturate to
///   `Decimal::MAX` / `Decimal::MIN`
pub fn decimal_from_f64(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }

    match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        None if value.abs() < 1.0 => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the base currency unit (dollars, euros, yen).
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact base-10 arithmetic, negatives pass through
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **No currency**: the currency is a formatting concern of [`crate::CurrencyLocale`]
///
/// ## Where Money is Used
/// ```text
/// bill text ──► f64 ──► Money (bill) ──► percent_of ──► Money (tip)
///                                                          │
///                                             round up? ──► ceil()
///                                                          │
///                                      CurrencyLocale::format ──► "$7.50"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Creates a Money value from an exact decimal.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from a float, via its shortest decimal form.
    ///
    /// Saturates instead of failing, see [`decimal_from_f64`].
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let bill = Money::from_f64(33.33);
    /// assert_eq!(bill.amount(), Decimal::new(3333, 2));
    /// ```
    pub fn from_f64(value: f64) -> Self {
        Money(decimal_from_f64(value))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero (either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly below zero.
    ///
    /// A negative zero (`-0.00`) is not negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checks if the value is a whole number of currency units.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert!(Money::from_f64(8.0).is_whole());
    /// assert!(!Money::from_f64(7.5).is_whole());
    /// ```
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Returns `percent` percent of this amount.
    ///
    /// `percent` is in percentage points: `15` means 15%.
    /// Saturates at the decimal range instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let bill = Money::from_f64(110.0);
    /// let tip = bill.percent_of(Decimal::from(10));
    /// assert_eq!(tip, Money::from_f64(11.0));
    /// ```
    pub fn percent_of(&self, percent: Decimal) -> Money {
        let rate = percent / Decimal::ONE_HUNDRED;
        Money::normalized(self.0.saturating_mul(rate))
    }

    /// Rounds toward positive infinity to a whole currency unit.
    ///
    /// ```text
    ///   4.01 → 5      5.00 → 5      5.9994 → 6      -4.5 → -4
    /// ```
    pub fn ceil(&self) -> Money {
        Money::normalized(self.0.ceil())
    }

    /// Rounds to `fraction_digits` decimal places using Bankers Rounding.
    ///
    /// ## Bankers Rounding
    /// Midpoints go to the nearest even digit (`0.125` → `0.12`,
    /// `0.135` → `0.14`), which is what platform currency formatters do.
    pub fn round_to(&self, fraction_digits: u32) -> Money {
        Money::normalized(
            self.0
                .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Drops the sign of a zero result so `-0` never leaks into output.
    fn normalized(amount: Decimal) -> Money {
        if amount.is_zero() {
            Money(Decimal::ZERO)
        } else {
            Money(amount)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the bare decimal amount.
///
/// ## Note
/// This is for debugging. Use [`crate::CurrencyLocale::format`] for display,
/// it knows about symbols, separators and fraction digits.
/// Precision flags are forwarded: `format!("{:.2}", money)`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::from_decimal(amount)
    }
}

/// Addition of two Money values (saturating).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money::normalized(self.0.saturating_add(other.0))
    }
}

/// Subtraction of two Money values (saturating).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money::normalized(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_uses_shortest_decimal() {
        assert_eq!(Money::from_f64(33.33).amount(), Decimal::new(3333, 2));
        assert_eq!(Money::from_f64(0.1).amount(), Decimal::new(1, 1));
        assert_eq!(Money::from_f64(50.0).amount(), Decimal::from(50));
    }

    #[test]
    fn test_from_f64_saturates() {
        assert_eq!(Money::from_f64(f64::NAN), Money::zero());
        assert_eq!(Money::from_f64(f64::INFINITY).amount(), Decimal::MAX);
        assert_eq!(Money::from_f64(f64::NEG_INFINITY).amount(), Decimal::MIN);
        assert_eq!(Money::from_f64(1e300).amount(), Decimal::MAX);
        assert_eq!(Money::from_f64(-1e300).amount(), Decimal::MIN);
    }

    #[test]
    fn test_percent_of() {
        let bill = Money::from_f64(50.0);
        assert_eq!(bill.percent_of(Decimal::from(15)), Money::from_f64(7.5));

        let bill = Money::from_f64(33.33);
        assert_eq!(
            bill.percent_of(Decimal::from(18)).amount(),
            Decimal::new(59994, 4)
        );
    }

    /// Critical test: the float version of this is 11.000000000000002
    #[test]
    fn test_percent_of_is_exact() {
        let tip = Money::from_f64(110.0).percent_of(Decimal::from(10));
        assert!(tip.is_whole());
        assert_eq!(tip.ceil(), Money::from_f64(11.0));

        let tip = Money::from_f64(100.0).percent_of(decimal_from_f64(7.0));
        assert_eq!(tip.ceil(), Money::from_f64(7.0));
    }

    #[test]
    fn test_percent_of_saturates() {
        let huge = Money::from_decimal(Decimal::MAX);
        let tip = huge.percent_of(Decimal::from(1000));
        assert_eq!(tip.amount(), Decimal::MAX);
    }

    #[test]
    fn test_ceil() {
        assert_eq!(Money::from_f64(4.01).ceil(), Money::from_f64(5.0));
        assert_eq!(Money::from_f64(5.0).ceil(), Money::from_f64(5.0));
        assert_eq!(Money::from_f64(5.9994).ceil(), Money::from_f64(6.0));
        assert_eq!(Money::from_f64(-4.5).ceil(), Money::from_f64(-4.0));
    }

    #[test]
    fn test_ceil_of_small_negative_is_plain_zero() {
        let ceiled = Money::from_f64(-0.5).ceil();
        assert!(ceiled.is_zero());
        assert!(!ceiled.is_negative());
        assert!(!ceiled.amount().is_sign_negative());
    }

    #[test]
    fn test_round_to_bankers() {
        assert_eq!(Money::from_f64(0.125).round_to(2), Money::from_f64(0.12));
        assert_eq!(Money::from_f64(0.135).round_to(2), Money::from_f64(0.14));
        assert_eq!(Money::from_f64(7.5).round_to(0), Money::from_f64(8.0));
        assert_eq!(Money::from_f64(6.5).round_to(0), Money::from_f64(6.0));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(zero.is_whole());

        let negative = Money::from_f64(-1.25);
        assert!(negative.is_negative());
        assert!(!negative.is_whole());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_f64(10.0);
        let b = Money::from_f64(2.5);
        assert_eq!(a + b, Money::from_f64(12.5));
        assert_eq!(a - b, Money::from_f64(7.5));
        assert_eq!(b - b, Money::zero());
    }

    #[test]
    fn test_display_forwards_precision() {
        assert_eq!(format!("{}", Money::from_f64(7.5)), "7.5");
        assert_eq!(format!("{:.2}", Money::from_f64(7.5)), "7.50");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Money::from_f64(7.5)).unwrap();
        assert_eq!(json, "\"7.5\"");
    }
}
