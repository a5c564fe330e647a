//! # Tip Engine
//!
//! Computes a tip from a bill amount and a tip percentage, optionally rounds
//! it up to a whole currency unit, and formats it for a locale.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  amount ──┐                                                            │
//! │           ├──► tip = amount × (tip_percent / 100)                      │
//! │  percent ─┘              │                                              │
//! │                          ▼                                              │
//! │  round_up? ── yes ──► tip = ceil(tip)     (4.01 → 5, 5.00 → 5)         │
//! │      │                   │                                              │
//! │      no                  │                                              │
//! │      └──────────┬────────┘                                              │
//! │                 ▼                                                       │
//! │         locale.format(tip) ──► "$7.50"                                 │
//! │                                                                         │
//! │  No validation: a negative amount produces a negative tip.             │
//! │  No default tip: a 0 percent request yields "$0.00".                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::parse_number_or_zero;
use crate::locale::CurrencyLocale;
use crate::money::{decimal_from_f64, Money};

// =============================================================================
// Tip Request
// =============================================================================

/// One evaluation of the tip engine.
///
/// Built fresh on every input change and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRequest {
    /// Bill total in the base currency unit
    pub amount: f64,

    /// Tip in percentage points (15.0 means 15%)
    pub tip_percent: f64,

    /// Round the tip up to the next whole currency unit
    pub round_up: bool,
}

impl TipRequest {
    /// Creates a request from already-parsed numbers.
    pub const fn new(amount: f64, tip_percent: f64, round_up: bool) -> Self {
        TipRequest {
            amount,
            tip_percent,
            round_up,
        }
    }

    /// Creates a request from the raw text of the two input fields.
    ///
    /// Unparseable text counts as zero, see [`parse_number_or_zero`].
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::TipRequest;
    ///
    /// let request = TipRequest::from_inputs("50", "", false);
    /// assert_eq!(request.amount, 50.0);
    /// assert_eq!(request.tip_percent, 0.0);
    /// ```
    pub fn from_inputs(amount_text: &str, tip_text: &str, round_up: bool) -> Self {
        TipRequest::new(
            parse_number_or_zero(amount_text),
            parse_number_or_zero(tip_text),
            round_up,
        )
    }

    /// Computes the tip before any currency formatting.
    ///
    /// When `round_up` is set the result is always a whole number.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::{Money, TipRequest};
    ///
    /// let tip = TipRequest::new(33.33, 18.0, true).tip();
    /// assert_eq!(tip, Money::from_f64(6.0));
    /// ```
    pub fn tip(&self) -> Money {
        let bill = Money::from_f64(self.amount);
        let tip = bill.percent_of(decimal_from_f64(self.tip_percent));

        if self.round_up {
            tip.ceil()
        } else {
            tip
        }
    }

    /// Computes and formats the tip for `locale`.
    pub fn evaluate(&self, locale: &CurrencyLocale) -> TipResult {
        let tip = self.tip();
        TipResult {
            tip,
            formatted: locale.format(&tip),
        }
    }
}

// =============================================================================
// Tip Result
// =============================================================================

/// Outcome of one tip evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipResult {
    /// Tip before formatting (already rounded up when requested)
    pub tip: Money,

    /// Tip as currency text for the requested locale
    pub formatted: String,
}

impl fmt::Display for TipResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

// =============================================================================
// Engine Entry Point
// =============================================================================

/// Calculates the tip amount and formats it as currency.
///
/// ## Arguments
/// * `amount` - the bill total
/// * `tip_percent` - percentage points; there is no implicit default
/// * `round_up` - ceil the tip to a whole currency unit
/// * `locale` - currency conventions to format with
///
/// Never panics and never fails for finite input.
///
/// ## Example
/// ```rust
/// use tipcalc_core::{compute_tip, CurrencyLocale};
///
/// let us = CurrencyLocale::en_us();
/// assert_eq!(compute_tip(50.0, 15.0, false, &us), "$7.50");
/// assert_eq!(compute_tip(50.0, 15.0, true, &us), "$8.00");
/// assert_eq!(compute_tip(0.0, 20.0, true, &us), "$0.00");
/// ```
pub fn compute_tip(amount: f64, tip_percent: f64, round_up: bool, locale: &CurrencyLocale) -> String {
    TipRequest::new(amount, tip_percent, round_up)
        .evaluate(locale)
        .formatted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> CurrencyLocale {
        CurrencyLocale::en_us()
    }

    #[test]
    fn test_fifteen_percent_of_fifty() {
        assert_eq!(compute_tip(50.0, 15.0, false, &us()), "$7.50");
    }

    #[test]
    fn test_fifteen_percent_of_fifty_rounded_up() {
        assert_eq!(compute_tip(50.0, 15.0, true, &us()), "$8.00");
    }

    #[test]
    fn test_zero_amount_rounded_up() {
        assert_eq!(compute_tip(0.0, 20.0, true, &us()), "$0.00");
    }

    #[test]
    fn test_ceiling_of_near_integer() {
        // 33.33 × 18% = 5.9994
        assert_eq!(compute_tip(33.33, 18.0, true, &us()), "$6.00");
        assert_eq!(compute_tip(33.33, 18.0, false, &us()), "$6.00");
    }

    #[test]
    fn test_ceiling_not_rounding() {
        // 40.10 × 10% = 4.01 → 5, not 4
        assert_eq!(compute_tip(40.1, 10.0, true, &us()), "$5.00");
    }

    #[test]
    fn test_exact_integer_tip_is_not_bumped() {
        assert_eq!(compute_tip(50.0, 10.0, true, &us()), "$5.00");
        // f64 math gives 11.000000000000002 here
        assert_eq!(compute_tip(110.0, 10.0, true, &us()), "$11.00");
        assert_eq!(compute_tip(100.0, 7.0, true, &us()), "$7.00");
    }

    #[test]
    fn test_zero_percent_is_zero() {
        assert_eq!(compute_tip(123.45, 0.0, false, &us()), "$0.00");
        assert_eq!(compute_tip(123.45, 0.0, true, &us()), "$0.00");
    }

    #[test]
    fn test_zero_amount_with_negative_percent_is_plain_zero() {
        assert_eq!(compute_tip(0.0, -15.0, false, &us()), "$0.00");
        assert_eq!(compute_tip(-0.0, 15.0, true, &us()), "$0.00");
    }

    #[test]
    fn test_negative_amount_passes_through() {
        assert_eq!(compute_tip(-50.0, 15.0, false, &us()), "-$7.50");
        // ceil goes toward positive infinity
        assert_eq!(compute_tip(-50.0, 15.0, true, &us()), "-$7.00");
    }

    #[test]
    fn test_large_amount_is_grouped() {
        assert_eq!(compute_tip(1_000_000.0, 15.0, false, &us()), "$150,000.00");
    }

    #[test]
    fn test_formats_per_locale() {
        let de = CurrencyLocale::from_tag("de-DE").unwrap();
        assert_eq!(compute_tip(50.0, 15.0, false, &de), "7,50\u{a0}€");

        let ja = CurrencyLocale::from_tag("ja-JP").unwrap();
        assert_eq!(compute_tip(5000.0, 15.0, false, &ja), "￥750");
    }

    #[test]
    fn test_non_finite_input_does_not_panic() {
        let locale = us();
        let _ = compute_tip(f64::NAN, 15.0, true, &locale);
        let _ = compute_tip(f64::INFINITY, 15.0, true, &locale);
        let _ = compute_tip(50.0, f64::NEG_INFINITY, false, &locale);
        assert_eq!(compute_tip(f64::NAN, 15.0, false, &locale), "$0.00");
    }

    #[test]
    fn test_round_up_tip_is_whole() {
        let tip = TipRequest::new(33.33, 18.0, true).tip();
        assert!(tip.is_whole());
        assert_eq!(tip, Money::from_f64(6.0));
    }

    #[test]
    fn test_evaluate_carries_both_forms() {
        let result = TipRequest::new(50.0, 15.0, false).evaluate(&us());
        assert_eq!(result.tip, Money::from_f64(7.5));
        assert_eq!(result.formatted, "$7.50");
        assert_eq!(result.to_string(), "$7.50");
    }

    #[test]
    fn test_from_inputs_defaults_to_zero() {
        let request = TipRequest::from_inputs("", "", true);
        assert_eq!(request, TipRequest::new(0.0, 0.0, true));
        assert_eq!(request.evaluate(&us()).formatted, "$0.00");

        let request = TipRequest::from_inputs("50", "abc", false);
        assert_eq!(request.evaluate(&us()).formatted, "$0.00");
    }

    #[test]
    fn test_identical_requests_identical_results() {
        let request = TipRequest::from_inputs("87.65", "17.5", false);
        assert_eq!(request.evaluate(&us()), request.evaluate(&us()));
    }

    #[test]
    fn test_result_serializes() {
        let result = TipRequest::new(50.0, 15.0, true).evaluate(&us());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["formatted"], "$8.00");
        assert!(json["tip"].is_string());
    }
}
