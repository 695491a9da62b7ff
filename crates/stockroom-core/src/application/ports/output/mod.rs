//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stockroom-adapters` crate provides a reference implementation.

#[cfg(test)]
use mockall::automock;

use crate::domain::Product;

/// Port for product persistence.
///
/// Implemented by:
/// - `stockroom_adapters::repository::InMemoryProductRepository` (reference, testing)
/// - host applications (production storage)
///
/// ## Design Notes
///
/// - Calls are synchronous and return definitive answers; a storage failure
///   is reported as `false` (or an empty result) and passed through unchanged.
/// - `update_stock` sets an absolute quantity. Delta arithmetic belongs to
///   the caller.
/// - The low-stock and out-of-stock policies are owned by the implementation.
/// - The service never holds a lock across calls, so an implementation that
///   needs atomic read-modify-write must provide it itself.
#[cfg_attr(test, automock)]
pub trait ProductRepository: Send + Sync {
    /// Look up a product by exact code.
    fn find_by_code(&self, code: &str) -> Option<Product>;

    /// List every stored product.
    fn find_all(&self) -> Vec<Product>;

    /// Products whose name contains `name`.
    fn find_by_name(&self, name: &str) -> Vec<Product>;

    /// Products in the named category.
    fn find_by_category(&self, category: &str) -> Vec<Product>;

    /// Products at or below their minimum stock.
    fn find_low_stock(&self) -> Vec<Product>;

    /// Products with nothing on hand.
    fn find_out_of_stock(&self) -> Vec<Product>;

    /// Persist a product.
    fn save(&self, product: &Product) -> bool;

    /// Set the stock of `code` to `quantity`.
    fn update_stock(&self, code: &str, quantity: i64) -> bool;

    /// Remove the product stored under `code`.
    fn delete(&self, code: &str) -> bool;
}
