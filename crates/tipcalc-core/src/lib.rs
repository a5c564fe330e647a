//! # tipcalc-core: Pure Business Logic for the Tip Calculator
//!
//! This crate is the **heart** of the tip calculator. It contains the tip
//! engine, money arithmetic and currency formatting as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tip Calculator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Shell (tipcalc-cli)                │   │
//! │  │   bill text ──► tip text ──► round-up switch ──► "Tip Amount"   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ every change                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipcalc-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   input   │  │    tip    │  │   money   │  │  locale   │  │   │
//! │  │   │ text → f64│─►│TipRequest │─►│   Money   │─►│ Currency  │  │   │
//! │  │   │ (or zero) │  │ TipResult │  │ (decimal) │  │  Locale   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENV VARS • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tip`] - The tip engine (`compute_tip`, `TipRequest`, `TipResult`)
//! - [`money`] - Money type backed by an exact decimal
//! - [`locale`] - Currency formatting conventions per locale
//! - [`input`] - Normalization of raw text into numbers
//! - [`validation`] - Checks for custom locale settings
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same request + same locale = same output
//! 2. **Explicit Locale**: formatting conventions are a parameter, never ambient state
//! 3. **Decimal Money**: tips are computed on exact decimals so ceiling is never off by one
//! 4. **Total Engine**: the tip engine never fails or panics on numeric input
//!
//! ## Example Usage
//!
//! ```rust
//! use tipcalc_core::{compute_tip, parse_number_or_zero, CurrencyLocale};
//!
//! let locale = CurrencyLocale::en_us();
//! let amount = parse_number_or_zero("50.00");
//! let percent = parse_number_or_zero("15");
//!
//! assert_eq!(compute_tip(amount, percent, false, &locale), "$7.50");
//! assert_eq!(compute_tip(amount, percent, true, &locale), "$8.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod input;
pub mod locale;
pub mod money;
pub mod tip;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipcalc_core::Money` instead of
// `use tipcalc_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use input::parse_number_or_zero;
pub use locale::{CurrencyLocale, SymbolPosition};
pub use money::Money;
pub use tip::{compute_tip, TipRequest, TipResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Locale used when the requested one cannot be resolved.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Maximum number of fraction digits a currency may display.
///
/// ISO 4217 currencies use 0 to 4 minor digits (CLF, UYW use 4).
pub const MAX_FRACTION_DIGITS: u32 = 4;
