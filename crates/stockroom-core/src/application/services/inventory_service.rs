//! Inventory Service - stock management use cases.
//!
//! Every mutating operation follows the same shape:
//! 1. Check arguments against the validation rules
//! 2. Load the product through the repository
//! 3. Enforce the stock rule (active, sufficient, empty before removal)
//! 4. Hand the result to the repository and report its answer
//!
//! Refusals are reported as `false` (or `None`) and logged with a typed reason.
//! Nothing here panics or returns an error to the caller.
//!
//! # Concurrency
//!
//! `stock_in` and `stock_out` read the current stock, compute the new level and
//! then write it back with [`ProductRepository::update_stock`]. Two concurrent
//! movements on the same code can interleave between the read and the write
//! and lose one update. No locking is done here; a repository that needs
//! atomic movements must serialise them itself.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ProductRepository},
    domain::{DomainValidator as validator, Product, ValidationRules},
    error::{StockroomError, StockroomResult},
};

/// Main inventory service.
pub struct InventoryService {
    repository: Box<dyn ProductRepository>,
    rules: ValidationRules,
}

impl InventoryService {
    /// Create a service that validates with [`ValidationRules::STANDARD`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stockroom_core::application::{InventoryService, ports::*};
    ///
    /// let service = InventoryService::new(
    ///     repository, // Box<dyn ProductRepository>
    /// );
    /// ```
    pub fn new(repository: Box<dyn ProductRepository>) -> Self {
        Self {
            repository,
            rules: ValidationRules::STANDARD,
        }
    }

    /// Create a service with custom validation limits.
    ///
    /// Fails if the limits contradict each other.
    pub fn with_rules(
        repository: Box<dyn ProductRepository>,
        rules: ValidationRules,
    ) -> StockroomResult<Self> {
        if !rules.is_consistent() {
            return Err(StockroomError::Configuration {
                message: format!("inconsistent validation rules: {rules:?}"),
            });
        }
        Ok(Self { repository, rules })
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Add a new product.
    ///
    /// Refused if the product is invalid or its code is already stored; in
    /// both cases `save` is never called.
    #[instrument(skip_all, fields(code = %product.code))]
    pub fn add_product(&self, product: &Product) -> bool {
        settle("add_product", self.try_add_product(product))
    }

    /// Remove a product. Only products with no stock on hand can be removed.
    #[instrument(skip(self))]
    pub fn remove_product(&self, code: &str) -> bool {
        settle("remove_product", self.try_remove_product(code))
    }

    /// Look a product up by code. Invalid codes never reach the repository.
    #[instrument(skip(self))]
    pub fn find_product_by_code(&self, code: &str) -> Option<Product> {
        if let Err(e) = self.rules.check_code(code) {
            debug!(error = %e, "Lookup skipped");
            return None;
        }
        self.repository.find_by_code(code)
    }

    pub fn find_products_by_name(&self, name: &str) -> Vec<Product> {
        self.repository.find_by_name(name)
    }

    pub fn find_products_by_category(&self, category: &str) -> Vec<Product> {
        self.repository.find_by_category(category)
    }

    /// Set the stock of an existing product to an absolute level.
    ///
    /// Unlike [`stock_in`](Self::stock_in) and [`stock_out`](Self::stock_out)
    /// this does not look at the current level or the active flag.
    #[instrument(skip(self))]
    pub fn update_stock(&self, code: &str, new_quantity: i64) -> bool {
        settle("update_stock", self.try_update_stock(code, new_quantity))
    }

    /// Receive `quantity` units into an active product's stock.
    #[instrument(skip(self))]
    pub fn stock_in(&self, code: &str, quantity: i64) -> bool {
        settle("stock_in", self.try_stock_in(code, quantity))
    }

    /// Take `quantity` units out of an active product's stock.
    #[instrument(skip(self))]
    pub fn stock_out(&self, code: &str, quantity: i64) -> bool {
        settle("stock_out", self.try_stock_out(code, quantity))
    }

    /// Products the repository considers low on stock.
    pub fn low_stock_products(&self) -> Vec<Product> {
        self.repository.find_low_stock()
    }

    /// Products the repository considers out of stock.
    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.repository.find_out_of_stock()
    }

    /// Sum of `price * stock` over active products.
    pub fn total_inventory_value(&self) -> f64 {
        self.repository
            .find_all()
            .iter()
            .filter(|p| p.active)
            .map(Product::stock_value)
            .sum()
    }

    /// Units on hand across active products.
    ///
    /// Saturates at `i64::MAX` when the sum does not fit.
    pub fn total_stock(&self) -> i64 {
        let total = self
            .repository
            .find_all()
            .iter()
            .filter(|p| p.active)
            .try_fold(0i64, |acc, p| acc.checked_add(p.stock));

        total.unwrap_or_else(|| {
            warn!("total stock exceeds i64::MAX, saturating");
            i64::MAX
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn try_add_product(&self, product: &Product) -> StockroomResult<bool> {
        self.rules.check_product(product)?;

        if self.repository.find_by_code(&product.code).is_some() {
            return Err(ApplicationError::DuplicateCode {
                code: product.code.clone(),
            }
            .into());
        }

        Ok(self.repository.save(product))
    }

    fn try_remove_product(&self, code: &str) -> StockroomResult<bool> {
        self.rules.check_code(code)?;
        let product = self.require(code)?;

        if product.stock > 0 {
            return Err(ApplicationError::StockRemaining {
                code: product.code,
                stock: product.stock,
            }
            .into());
        }

        Ok(self.repository.delete(code))
    }

    fn try_update_stock(&self, code: &str, new_quantity: i64) -> StockroomResult<bool> {
        if !validator::is_valid_stock(new_quantity) {
            return Err(ApplicationError::InvalidQuantity(new_quantity).into());
        }
        self.require(code)?;

        Ok(self.repository.update_stock(code, new_quantity))
    }

    fn try_stock_in(&self, code: &str, quantity: i64) -> StockroomResult<bool> {
        let product = self.movable(code, quantity)?;

        let new_stock =
            product
                .stock
                .checked_add(quantity)
                .ok_or_else(|| ApplicationError::StockOverflow {
                    code: product.code.clone(),
                    stock: product.stock,
                    quantity,
                })?;

        Ok(self.repository.update_stock(code, new_stock))
    }

    fn try_stock_out(&self, code: &str, quantity: i64) -> StockroomResult<bool> {
        let product = self.movable(code, quantity)?;

        if product.stock < quantity {
            return Err(ApplicationError::InsufficientStock {
                code: product.code,
                requested: quantity,
                available: product.stock,
            }
            .into());
        }

        Ok(self.repository.update_stock(code, product.stock - quantity))
    }

    /// Shared gate for stock movements: valid code, positive quantity,
    /// existing and active product.
    fn movable(&self, code: &str, quantity: i64) -> StockroomResult<Product> {
        self.rules.check_code(code)?;
        if !validator::is_valid_quantity(quantity) {
            return Err(ApplicationError::InvalidQuantity(quantity).into());
        }

        let product = self.require(code)?;
        if !product.active {
            return Err(ApplicationError::InactiveProduct {
                code: product.code,
            }
            .into());
        }
        Ok(product)
    }

    fn require(&self, code: &str) -> StockroomResult<Product> {
        self.repository.find_by_code(code).ok_or_else(|| {
            ApplicationError::ProductNotFound {
                code: code.to_string(),
            }
            .into()
        })
    }
}

/// Collapse an operation outcome into the boolean the public API reports.
fn settle(operation: &'static str, outcome: StockroomResult<bool>) -> bool {
    match outcome {
        Ok(true) => {
            info!(operation, "Inventory updated");
            true
        }
        Ok(false) => {
            warn!(operation, "Repository refused the change");
            false
        }
        Err(e) => {
            debug!(
                operation,
                error = %e,
                category = ?e.category(),
                "Operation rejected"
            );
            false
        }
    }
}
