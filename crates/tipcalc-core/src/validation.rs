//! # Validation Module
//!
//! Checks for currency locale settings that do not come from a preset.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Tip inputs                                                   │
//! │  └── NOT validated: bad text becomes zero (see `input`)                │
//! │                                                                         │
//! │  Layer 2: Locale overrides (symbol, fraction digits)                   │
//! │  └── THIS MODULE: rejected before they reach the formatter             │
//! │                                                                         │
//! │  Built-in presets are known-good and skip this layer.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::locale::CurrencyLocale;
use crate::MAX_FRACTION_DIGITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a currency symbol.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must not contain ASCII digits (they would blend into the amount)
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::validate_currency_symbol;
///
/// assert!(validate_currency_symbol("€").is_ok());
/// assert!(validate_currency_symbol("").is_err());
/// assert!(validate_currency_symbol("1$").is_err());
/// ```
pub fn validate_currency_symbol(symbol: &str) -> ValidationResult<()> {
    if symbol.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency_symbol".to_string(),
        });
    }

    if symbol.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency_symbol".to_string(),
            reason: "must not contain digits".to_string(),
        });
    }

    Ok(())
}

/// Validates the number of fraction digits.
///
/// ## Rules
/// - Must be between 0 and MAX_FRACTION_DIGITS (4)
pub fn validate_fraction_digits(digits: u32) -> ValidationResult<()> {
    if digits > MAX_FRACTION_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "fraction_digits".to_string(),
            min: 0,
            max: MAX_FRACTION_DIGITS as i64,
        });
    }

    Ok(())
}

/// Validates a whole locale.
///
/// ## Rules
/// - Symbol passes [`validate_currency_symbol`]
/// - Fraction digits pass [`validate_fraction_digits`]
/// - Decimal separator is present when there are fraction digits
/// - Grouping and decimal separators differ
pub fn validate_locale(locale: &CurrencyLocale) -> ValidationResult<()> {
    validate_currency_symbol(&locale.currency_symbol)?;
    validate_fraction_digits(locale.fraction_digits)?;

    if locale.fraction_digits > 0 && locale.decimal_separator.is_empty() {
        return Err(ValidationError::Required {
            field: "decimal_separator".to_string(),
        });
    }

    if locale.grouping_separator == locale.decimal_separator {
        return Err(ValidationError::InvalidFormat {
            field: "grouping_separator".to_string(),
            reason: "must differ from the decimal separator".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
