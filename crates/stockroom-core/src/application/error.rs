//! Application layer errors.
//!
//! These errors represent failed stock rules and lookups during orchestration.
//! Field validation failures are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Reasons an inventory operation was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No product is stored under the code.
    #[error("Product not found: {code}")]
    ProductNotFound { code: String },

    /// A product with this code is already stored.
    #[error("Product code already in use: {code}")]
    DuplicateCode { code: String },

    /// Stock movements are blocked for inactive products.
    #[error("Product {code} is inactive")]
    InactiveProduct { code: String },

    /// Stock out would take the product below zero.
    #[error("Insufficient stock for {code}: requested {requested}, available {available}")]
    InsufficientStock {
        code: String,
        requested: i64,
        available: i64,
    },

    /// Products can only be removed once their stock is zero.
    #[error("Product {code} still holds {stock} units")]
    StockRemaining { code: String, stock: i64 },

    /// Quantities must be positive; absolute stock levels non-negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The new stock level does not fit in an `i64`.
    #[error("Stock for {code} would overflow: {stock} + {quantity}")]
    StockOverflow {
        code: String,
        stock: i64,
        quantity: i64,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProductNotFound { code } => vec![
                format!("No product with code '{}'", code),
                "Add the product before moving stock".into(),
            ],
            Self::DuplicateCode { code } => vec![
                format!("Code '{}' is taken", code),
                "Choose a different product code".into(),
            ],
            Self::InactiveProduct { code } => {
                vec![format!("Reactivate product '{}' first", code)]
            }
            Self::InsufficientStock { available, .. } => {
                vec![format!("At most {} units can be taken out", available)]
            }
            Self::StockRemaining { stock, .. } => {
                vec![format!("Move the remaining {} units out first", stock)]
            }
            Self::InvalidQuantity(quantity) => vec![
                format!("Quantity {} was rejected", quantity),
                "Move at least one unit".into(),
            ],
            Self::StockOverflow { code, stock, .. } => vec![
                format!("Product '{}' already holds {} units", code, stock),
                "Split the delivery or correct the stock level first".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProductNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidQuantity(_) => ErrorCategory::Validation,
            Self::DuplicateCode { .. }
            | Self::InactiveProduct { .. }
            | Self::InsufficientStock { .. }
            | Self::StockRemaining { .. }
            | Self::StockOverflow { .. } => ErrorCategory::BusinessRule,
        }
    }
}
