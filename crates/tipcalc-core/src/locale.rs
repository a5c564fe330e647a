//! # Currency Locale
//!
//! Conventions for rendering a [`Money`] value as currency text.
//!
//! ## Anatomy of Formatted Currency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   en-US:   -$1,234.50          de-DE:   -1.234,50 €                     │
//! │            │ │  │  └─ fraction digits (2)      │  └─ symbol (suffix)    │
//! │            │ │  └──── decimal separator ".")   └──── NBSP spacing       │
//! │            │ └─────── grouping separator (",")                          │
//! │            └───────── symbol (prefix)                                   │
//! │                                                                         │
//! │   ja-JP:   ￥1,235            (0 fraction digits, rounded half-even)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Explicit, Not Ambient
//! The locale is always a parameter. Nothing in this module reads `LANG`
//! or any other environment state; the shell resolves the tag and passes
//! the result in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_locale;
use crate::DEFAULT_LOCALE_TAG;

const NBSP: &str = "\u{00A0}";
const NARROW_NBSP: &str = "\u{202F}";

// =============================================================================
// Symbol Position
// =============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$7.50`
    Prefix,

    /// `7,50 €`
    Suffix,
}

// =============================================================================
// Presets
// =============================================================================

struct Preset {
    tag: &'static str,
    currency_code: &'static str,
    currency_symbol: &'static str,
    symbol_position: SymbolPosition,
    symbol_spacing: &'static str,
    grouping_separator: &'static str,
    decimal_separator: &'static str,
    fraction_digits: u32,
}

/// Built-in locales.
///
/// The first preset of each language is that language's primary region,
/// used when a tag carries no region (`de` → `de-DE`).
const PRESETS: &[Preset] = &[
    Preset {
        tag: "en-US",
        currency_code: "USD",
        currency_symbol: "$",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        grouping_separator: ",",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    Preset {
        tag: "en-GB",
        currency_code: "GBP",
        currency_symbol: "£",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        grouping_separator: ",",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    Preset {
        tag: "en-CA",
        currency_code: "CAD",
        currency_symbol: "$",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        grouping_separator: ",",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    Preset {
        tag: "de-DE",
        currency_code: "EUR",
        currency_symbol: "€",
        symbol_position: SymbolPosition::Suffix,
        symbol_spacing: NBSP,
        grouping_separator: ".",
        decimal_separator: ",",
        fraction_digits: 2,
    },
    Preset {
        tag: "de-CH",
        currency_code: "CHF",
        currency_symbol: "CHF",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: NBSP,
        grouping_separator: "\u{2019}",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    Preset {
        tag: "fr-FR",
        currency_code: "EUR",
        currency_symbol: "€",
        symbol_position: SymbolPosition::Suffix,
        symbol_spacing: NBSP,
        grouping_separator: NARROW_NBSP,
        decimal_separator: ",",
        fraction_digits: 2,
    },
    Preset {
        tag: "ja-JP",
        currency_code: "JPY",
        currency_symbol: "￥",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        grouping_separator: ",",
        decimal_separator: ".",
        fraction_digits: 0,
    },
    Preset {
        tag: "ko-KR",
        currency_code: "KRW",
        currency_symbol: "₩",
        symbol_position: SymbolPosition::Prefix,
        symbol_spacing: "",
        grouping_separator: ",",
        decimal_separator: ".",
        fraction_digits: 0,
    },
];

impl Preset {
    fn to_locale(&self) -> CurrencyLocale {
        CurrencyLocale {
            tag: self.tag.to_string(),
            currency_code: self.currency_code.to_string(),
            currency_symbol: self.currency_symbol.to_string(),
            symbol_position: self.symbol_position,
            symbol_spacing: self.symbol_spacing.to_string(),
            grouping_separator: self.grouping_separator.to_string(),
            decimal_separator: self.decimal_separator.to_string(),
            fraction_digits: self.fraction_digits,
        }
    }

    fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

// =============================================================================
// Currency Locale
// =============================================================================

/// Currency formatting conventions for one locale.
///
/// ## Fields
/// Presets cover the common cases. Fields are public so the shell can
/// override a symbol or the fraction digits; run
/// [`crate::validation::validate_locale`] (or use the `with_*` helpers)
/// after editing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyLocale {
    /// BCP 47 style tag, e.g. "en-US"
    pub tag: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Symbol before or after the number
    pub symbol_position: SymbolPosition,

    /// Text between symbol and number ("" or a no-break space)
    pub symbol_spacing: String,

    /// Thousands separator
    pub grouping_separator: String,

    /// Separator between whole and fractional part
    pub decimal_separator: String,

    /// Number of decimal places for currency
    pub fraction_digits: u32,
}

impl CurrencyLocale {
    /// US English, US dollars. Also the fallback locale.
    pub fn en_us() -> Self {
        PRESETS[0].to_locale()
    }

    /// Returns every built-in locale.
    pub fn presets() -> Vec<CurrencyLocale> {
        PRESETS.iter().map(Preset::to_locale).collect()
    }

    /// Resolves a locale tag to its currency conventions.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "en-US"        exact
    /// "en_us"        case-insensitive, underscore allowed
    /// "de_DE.UTF-8"  POSIX codeset suffix dropped
    /// "de_DE@euro"   POSIX modifier dropped
    /// "de"           language only → primary region (de-DE)
    /// ```
    ///
    /// ## Errors
    /// [`CoreError::UnknownLocale`] when no preset matches. A known
    /// language with an unknown region (`en-AU`) is NOT guessed, because
    /// the currency would be wrong.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::CurrencyLocale;
    ///
    /// let locale = CurrencyLocale::from_tag("de_DE.UTF-8").unwrap();
    /// assert_eq!(locale.tag, "de-DE");
    /// assert!(CurrencyLocale::from_tag("C").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> CoreResult<Self> {
        let unknown = || CoreError::UnknownLocale {
            tag: tag.to_string(),
        };

        let base = tag
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");

        let mut parts = base.split('-').filter(|part| !part.is_empty());
        let language = parts.next().ok_or_else(unknown)?.to_ascii_lowercase();

        let preset = match parts.next() {
            Some(region) => {
                let wanted = format!("{}-{}", language, region.to_ascii_uppercase());
                PRESETS.iter().find(|preset| preset.tag == wanted)
            }
            None => PRESETS.iter().find(|preset| preset.language() == language),
        };

        preset.map(Preset::to_locale).ok_or_else(unknown)
    }

    /// Like [`CurrencyLocale::from_tag`], but falls back to `en-US`.
    pub fn from_tag_or_default(tag: &str) -> Self {
        CurrencyLocale::from_tag(tag).unwrap_or_else(|_| CurrencyLocale::en_us())
    }

    /// Replaces the currency symbol, validating the result.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> CoreResult<Self> {
        self.currency_symbol = symbol.into();
        validate_locale(&self)?;
        Ok(self)
    }

    /// Replaces the number of fraction digits, validating the result.
    pub fn with_fraction_digits(mut self, digits: u32) -> CoreResult<Self> {
        self.fraction_digits = digits;
        validate_locale(&self)?;
        Ok(self)
    }

    /// Formats a money value as currency text.
    ///
    /// ## Steps
    /// 1. Round to `fraction_digits` (Bankers Rounding)
    /// 2. Group the whole part by thousands
    /// 3. Attach the symbol per `symbol_position`
    /// 4. Prefix `-` for negative values (never for zero)
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::{CurrencyLocale, Money};
    ///
    /// let locale = CurrencyLocale::en_us();
    /// assert_eq!(locale.format(&Money::from_f64(1234.5)), "$1,234.50");
    /// assert_eq!(locale.format(&Money::from_f64(-7.5)), "-$7.50");
    /// ```
    pub fn format(&self, money: &Money) -> String {
        let rounded = money.round_to(self.fraction_digits);
        let digits = format!(
            "{:.*}",
            self.fraction_digits as usize,
            rounded.amount().abs()
        );

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(whole, &self.grouping_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        let body = match self.symbol_position {
            SymbolPosition::Prefix => {
                format!("{}{}{}", self.currency_symbol, self.symbol_spacing, number)
            }
            SymbolPosition::Suffix => {
                format!("{}{}{}", number, self.symbol_spacing, self.currency_symbol)
            }
        };

        if rounded.is_negative() {
            format!("-{body}")
        } else {
            body
        }
    }
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        CurrencyLocale::from_tag_or_default(DEFAULT_LOCALE_TAG)
    }
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
