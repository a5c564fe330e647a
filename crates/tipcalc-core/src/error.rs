//! # Error Types
//!
//! Domain-specific error types for tipcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipcalc-core errors (this file)                                       │
//! │  ├── CoreError        - Locale resolution failures                     │
//! │  └── ValidationError  - Invalid custom locale settings                 │
//! │                                                                         │
//! │  tipcalc-cli errors (in app)                                           │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! The tip engine itself has no error type. `compute_tip` is total over
//! numeric input, and bad text is turned into zero by [`crate::input`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No currency conventions are known for the locale tag.
    ///
    /// ## When This Occurs
    /// - Tag names a region we have no preset for (`en-AU`)
    /// - Tag is a POSIX pseudo-locale (`C`, `POSIX`)
    /// - Tag is empty
    ///
    /// Callers usually fall back to [`crate::DEFAULT_LOCALE_TAG`].
    #[error("Unknown locale: '{tag}'")]
    UnknownLocale { tag: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for locale settings.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., separators that collide).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
