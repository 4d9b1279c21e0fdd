//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures (per-field)          │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Not found, unique violations, pool failures    │
//! │                                                                         │
//! │  rest-api errors (in app)                                              │
//! │  └── ApiError         - What the wire sees (status + JSON body)        │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├──► ApiError ──► HTTP response                │
//! │        DbError ─────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field, because the wire error shape
//!    is a mapping from field name to messages
//! 3. Errors are enum variants, never String

use std::fmt;

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when client-supplied fields don't meet the data model rules.
/// The API layer turns them into a `{field: [message]}` JSON body, so the
/// rendered message deliberately does not repeat the field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("this field is required.")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("ensure this field has no more than {max} characters.")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value must not be negative.
    #[error("ensure this value is greater than or equal to 0.")]
    Negative { field: &'static str },

    /// Invalid format (e.g. a price that is not a decimal number).
    #[error("{reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// The name of the field this error applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validation Errors (collection)
// =============================================================================

/// Every field failure from validating one request, collected together.
///
/// The wire error body is a mapping from field name to messages, so a body
/// missing both `name` and `sku` must report both fields at once - not just
/// whichever validator happened to run first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.errors.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected failures, in field-validation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Unwraps a validator result, recording a failure instead of
    /// short-circuiting on it.
    pub fn collect<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field(), err)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        ValidationErrors { errors: vec![err] }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "sku" };
        assert_eq!(err.to_string(), "this field is required.");
        assert_eq!(err.field(), "sku");

        let err = ValidationError::TooLong {
            field: "name",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "ensure this field has no more than 100 characters."
        );
    }

    #[test]
    fn test_errors_collect_keeps_going() {
        let mut errors = ValidationErrors::new();

        let kept: Option<i64> = errors.collect(Ok(42));
        let dropped: Option<i64> =
            errors.collect(Err(ValidationError::Required { field: "name" }));
        errors.collect::<i64>(Err(ValidationError::Negative { field: "stock" }));

        assert_eq!(kept, Some(42));
        assert!(dropped.is_none());
        assert_eq!(errors.errors().len(), 2);
        assert_eq!(errors.errors()[0].field(), "name");
        assert_eq!(errors.errors()[1].field(), "stock");
    }

    #[test]
    fn test_negative_message() {
        let err = ValidationError::Negative { field: "stock" };
        assert_eq!(
            err.to_string(),
            "ensure this value is greater than or equal to 0."
        );
        assert_eq!(err.field(), "stock");
    }
}
