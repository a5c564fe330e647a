//! # CLI Error Type
//!
//! Unified error type for the terminal shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Tip Calculator                     │
//! │                                                                         │
//! │  Bad number text ("abc") ────► NOT an error, counts as 0               │
//! │                                                                         │
//! │  Unknown locale tag ─────────► NOT an error, falls back to en-US       │
//! │                                 (logged at WARN)                        │
//! │                                                                         │
//! │  Bad --symbol / digits ──────► CoreError::Validation ──┐               │
//! │  Unknown interactive cmd ────► CliError::UnknownCommand ├─► CliError   │
//! │  stdin/stdout failure ───────► std::io::Error ─────────┘      │        │
//! │                                                               ▼        │
//! │                                  plain: "Error: ..."  on stderr        │
//! │                                  json:  {"code","message"} on stderr   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In interactive mode command errors are printed and the loop continues;
//! only I/O failures end the session.

use serde::Serialize;
use thiserror::Error;
use tipcalc_core::CoreError;

/// Errors surfaced by the terminal shell.
#[derive(Debug, Error)]
pub enum CliError {
    /// Interactive input did not start with a known command word.
    #[error("Unknown command: '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    /// A known command got an argument it cannot use.
    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    /// Locale or validation failure from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

/// Machine-readable error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown or malformed interactive command
    InvalidCommand,

    /// Locale settings failed validation
    ValidationError,

    /// Locale could not be resolved
    UnknownLocale,

    /// I/O or serialization failure
    Internal,
}

/// What JSON consumers receive when the CLI fails.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Validation error: currency_symbol is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(command: &str, reason: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::UnknownCommand(_) | CliError::InvalidArgument { .. } => {
                ErrorCode::InvalidCommand
            }
            CliError::Core(CoreError::Validation(_)) => ErrorCode::ValidationError,
            CliError::Core(CoreError::UnknownLocale { .. }) => ErrorCode::UnknownLocale,
            CliError::Io(_) | CliError::Json(_) => ErrorCode::Internal,
        }
    }

    /// Builds the serializable form of this error.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::ValidationError;

    #[test]
    fn test_error_messages() {
        let err = CliError::UnknownCommand("tipp".to_string());
        assert_eq!(err.to_string(), "Unknown command: 'tipp' (type 'help' for a list)");

        let err = CliError::invalid_argument("round", "expected on, off or toggle");
        assert_eq!(
            err.to_string(),
            "Invalid argument for 'round': expected on, off or toggle"
        );
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: CliError = CoreError::Validation(ValidationError::Required {
            field: "currency_symbol".to_string(),
        })
        .into();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err: CliError = CoreError::UnknownLocale {
            tag: "xx".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::UnknownLocale);
    }

    #[test]
    fn test_payload_serialization() {
        let payload = CliError::UnknownCommand("x".to_string()).to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["code"], "INVALID_COMMAND");
        assert_eq!(json["message"], "Unknown command: 'x' (type 'help' for a list)");
    }
}
