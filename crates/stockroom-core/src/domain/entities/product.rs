//! The `Product` record.
//!
//! A `Product` is deliberately permissive: every field is public and any
//! combination of values can be constructed, including ones the validator
//! rejects. Validity is a question asked of a product, never a guarantee
//! carried by it. See [`crate::domain::DomainValidator`].
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Alphanumeric identifier, unique within a repository.
    pub code: String,
    pub name: String,
    /// Free-text category name. Not checked against any `Category`.
    pub category: String,
    pub price: f64,
    pub stock: i64,
    /// Threshold at or below which the product counts as low stock.
    pub minimum_stock: i64,
    pub active: bool,
}

impl Product {
    /// Create an active product. No validation happens here.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        minimum_stock: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            minimum_stock,
            active: true,
        }
    }

    /// Builder-style toggle for the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.minimum_stock
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// Value of the stock on hand: `price * stock`.
    ///
    /// Stock above 2^53 loses precision in the conversion to `f64`.
    pub fn stock_value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

impl Default for Product {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            category: String::new(),
            price: 0.0,
            stock: 0,
            minimum_stock: 0,
            active: true,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{code={}, name={}, category={}, price={}, stock={}, minimum_stock={}, active={}}}",
            self.code,
            self.name,
            self.category,
            self.price,
            self.stock,
            self.minimum_stock,
            self.active
        )
    }
}
