use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Category, Product},
    error::DomainError,
};

/// Length limits applied by the validator.
///
/// [`ValidationRules::STANDARD`] is what [`DomainValidator`] uses. Other
/// values only reach the inventory service through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub max_code_length: usize,
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub max_description_length: usize,
}

impl ValidationRules {
    pub const STANDARD: Self = Self {
        max_code_length: 10,
        min_name_length: 3,
        max_name_length: 100,
        max_description_length: 500,
    };

    pub fn check_code(&self, code: &str) -> Result<(), DomainError> {
        let invalid = |reason| DomainError::InvalidCode {
            code: code.to_string(),
            reason,
        };

        if code.trim().is_empty() {
            return Err(invalid("blank"));
        }
        if code.chars().count() > self.max_code_length {
            return Err(invalid("too long"));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("only ASCII letters and digits are allowed"));
        }
        Ok(())
    }

    /// Check a name-like field. `field` only labels the error.
    pub fn check_name(&self, field: &'static str, name: &str) -> Result<(), DomainError> {
        let invalid = |reason| DomainError::InvalidName {
            field,
            value: name.to_string(),
            reason,
        };

        let length = name.trim().chars().count();
        if length == 0 {
            return Err(invalid("blank"));
        }
        if length < self.min_name_length {
            return Err(invalid("too short"));
        }
        if length > self.max_name_length {
            return Err(invalid("too long"));
        }
        Ok(())
    }

    /// Field-by-field check in declaration order; the first failure wins.
    pub fn check_product(&self, product: &Product) -> Result<(), DomainError> {
        self.check_code(&product.code)?;
        self.check_name("name", &product.name)?;
        self.check_name("category", &product.category)?;

        if !DomainValidator::is_valid_price(product.price) {
            return Err(DomainError::InvalidPrice(product.price));
        }
        if !DomainValidator::is_valid_stock(product.stock) {
            return Err(DomainError::NegativeStock(product.stock));
        }
        if !DomainValidator::is_valid_minimum_stock(product.minimum_stock) {
            return Err(DomainError::NegativeMinimumStock(product.minimum_stock));
        }
        Ok(())
    }

    pub fn check_category(&self, category: &Category) -> Result<(), DomainError> {
        let code = category
            .code()
            .ok_or(DomainError::MissingRequiredField { field: "code" })?;
        self.check_code(code)?;

        let name = category
            .name()
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        self.check_name("name", name)?;

        if let Some(description) = category.description() {
            let length = description.chars().count();
            if length > self.max_description_length {
                return Err(DomainError::DescriptionTooLong {
                    length,
                    max: self.max_description_length,
                });
            }
        }
        Ok(())
    }

    pub fn is_valid_code(&self, code: &str) -> bool {
        self.check_code(code).is_ok()
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.check_name("name", name).is_ok()
    }

    pub fn is_valid_product(&self, product: &Product) -> bool {
        self.check_product(product).is_ok()
    }

    pub fn is_valid_category(&self, category: &Category) -> bool {
        self.check_category(category).is_ok()
    }

    /// Cross-field sanity of the limits themselves.
    pub fn is_consistent(&self) -> bool {
        self.max_code_length > 0 && self.min_name_length <= self.max_name_length
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities. Every
/// predicate is pure and answers with a `bool`; the `check_*` variants
/// explain a rejection.
pub struct DomainValidator;

impl DomainValidator {
    pub fn is_valid_code(code: &str) -> bool {
        ValidationRules::STANDARD.is_valid_code(code)
    }

    pub fn is_valid_name(name: &str) -> bool {
        ValidationRules::STANDARD.is_valid_name(name)
    }

    pub fn is_valid_price(price: f64) -> bool {
        price > 0.0
    }

    pub fn is_valid_stock(stock: i64) -> bool {
        stock >= 0
    }

    pub fn is_valid_minimum_stock(minimum_stock: i64) -> bool {
        minimum_stock >= 0
    }

    pub fn is_valid_percentage(value: f64) -> bool {
        (0.0..=100.0).contains(&value)
    }

    pub fn is_valid_quantity(quantity: i64) -> bool {
        quantity > 0
    }

    pub fn is_valid_product(product: &Product) -> bool {
        ValidationRules::STANDARD.is_valid_product(product)
    }

    pub fn is_valid_category(category: &Category) -> bool {
        ValidationRules::STANDARD.is_valid_category(category)
    }

    pub fn check_product(product: &Product) -> Result<(), DomainError> {
        ValidationRules::STANDARD.check_product(product)
    }

    pub fn check_category(category: &Category) -> Result<(), DomainError> {
        ValidationRules::STANDARD.check_category(category)
    }
}
