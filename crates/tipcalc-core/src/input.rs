//! # Input Normalization
//!
//! Turns the raw text of the bill and tip fields into numbers.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell state          Normalization (THIS MODULE)        Tip Engine     │
//! │  ───────────          ───────────────────────────        ──────────     │
//! │                                                                         │
//! │  "50.00"  ──────────► parse_number_or_zero ──► 50.0 ──►                 │
//! │  "abc"    ──────────► parse_number_or_zero ──►  0.0 ──► compute_tip()   │
//! │  ""       ──────────► parse_number_or_zero ──►  0.0 ──►                 │
//! │                                                                         │
//! │  This is the ONLY place where text is interpreted as a number.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Parses `text` as a decimal number, or returns `0.0`.
///
/// ## Rules
/// - Period is the decimal separator (numeric keypad input), regardless of locale
/// - Leading and trailing whitespace is ignored
/// - A parsed value is returned unmodified, negative values included
/// - Empty, non-numeric or malformed text gives `0.0`
/// - `NaN`, `inf` and values that overflow to infinity give `0.0`
///
/// The result is always finite.
///
/// ## Example
/// ```rust
/// use tipcalc_core::input::parse_number_or_zero;
///
/// assert_eq!(parse_number_or_zero("12.5"), 12.5);
/// assert_eq!(parse_number_or_zero(""), 0.0);
/// assert_eq!(parse_number_or_zero("abc"), 0.0);
/// assert_eq!(parse_number_or_zero("-3"), -3.0);
/// ```
pub fn parse_number_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
