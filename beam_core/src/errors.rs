//! # Error Types
//!
//! Structured error types for beam_core. These errors are designed to be
//! informative for both humans and programs, providing enough context to
//! understand and fix issues without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::domain(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Section width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates the physical preconditions of the model
    /// (cover ≥ height, non-positive width or safety factor, ...)
    #[error("Domain error for '{field}': {value} - {reason}")]
    Domain {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Report compilation or PDF rendering failed
    #[error("Render error during {stage}: {reason}")]
    Render { stage: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a Domain error
    pub fn domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Domain {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Render error
    pub fn render(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Render {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Domain errors are never recoverable: the same inputs always fail.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Render { .. } => "RENDER_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain("cover_mm", "500", "Cover must be less than section height");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Domain\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::domain("width_mm", "0", "x").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::render("compile", "bad").error_code(), "RENDER_ERROR");
        assert_eq!(
            CalcError::file_error("open", "a.json", "missing").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_domain_errors_not_recoverable() {
        assert!(!CalcError::domain("gamma_s", "0", "x").is_recoverable());
        assert!(CalcError::file_error("write", "r.pdf", "denied").is_recoverable());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::domain("width_mm", "0", "Section width must be positive");
        assert_eq!(
            error.to_string(),
            "Domain error for 'width_mm': 0 - Section width must be positive"
        );
    }
}
