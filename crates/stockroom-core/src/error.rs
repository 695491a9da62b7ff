//! Unified error handling for Stockroom Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors. The inventory service never returns it to callers; it is the type
//! its guarded operations are written against, and what gets logged when an
//! operation is refused.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stockroom Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StockroomError {
    /// Errors from the domain layer (field validation).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (stock rules and lookups).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StockroomError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your settings and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    BusinessRule,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StockroomResult<T> = Result<T, StockroomError>;
