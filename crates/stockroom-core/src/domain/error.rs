// ============================================================================
// domain/error.rs - FIELD VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Every variant names the field that failed so callers can log a precise
/// reason even though the public inventory API only reports `false`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Identifier Errors
    // ========================================================================
    #[error("invalid code '{code}': {reason}")]
    InvalidCode { code: String, reason: &'static str },

    // ========================================================================
    // Text Errors
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("description is {length} characters, limit is {max}")]
    DescriptionTooLong { length: usize, max: usize },

    // ========================================================================
    // Numeric Errors
    // ========================================================================
    #[error("price must be greater than zero, got {0}")]
    InvalidPrice(f64),

    #[error("stock cannot be negative, got {0}")]
    NegativeStock(i64),

    #[error("minimum stock cannot be negative, got {0}")]
    NegativeMinimumStock(i64),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCode { code, .. } => vec![
                format!("Code '{}' was rejected", code),
                "Codes are 1 to 10 ASCII letters or digits".into(),
            ],
            Self::InvalidName { field, .. } => vec![
                format!("Check the {} value", field),
                "Names are 3 to 100 characters after trimming".into(),
            ],
            Self::DescriptionTooLong { max, .. } => {
                vec![format!("Shorten the description to {} characters", max)]
            }
            Self::InvalidPrice(_) => vec!["Prices must be positive".into()],
            Self::NegativeStock(_) | Self::NegativeMinimumStock(_) => {
                vec!["Stock levels start at zero".into()]
            }
            Self::MissingRequiredField { field } => vec![format!("Provide a value for {}", field)],
        }
    }

    /// Field failures are always validation errors.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
