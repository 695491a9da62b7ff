//! In-memory product repository.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use stockroom_core::{application::ports::ProductRepository, domain::Product};
use tracing::error;

/// Thread-safe in-memory product repository.
///
/// Clones share the same storage, so a test can hand one clone to the
/// service and inspect the other.
///
/// Policies:
/// - name search is a case-insensitive substring match
/// - category search is a case-insensitive exact match
/// - low stock means `stock <= minimum_stock`
/// - out of stock means `stock <= 0`
/// - results are ordered by code
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<BTreeMap<String, Product>>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `products`. Later duplicates replace
    /// earlier ones.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.code.clone(), p))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of products.
    pub fn len(&self) -> usize {
        self.read().map_or(0, |inner| inner.len())
    }

    /// Check if repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every product.
    pub fn clear(&self) {
        if let Some(mut inner) = self.write() {
            inner.clear();
        }
    }

    fn read(&self) -> Option<RwLockReadGuard<'_, BTreeMap<String, Product>>> {
        self.inner
            .read()
            .map_err(|_| error!("Product repository lock poisoned"))
            .ok()
    }

    fn write(&self) -> Option<RwLockWriteGuard<'_, BTreeMap<String, Product>>> {
        self.inner
            .write()
            .map_err(|_| error!("Product repository lock poisoned"))
            .ok()
    }

    fn filtered(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.read()
            .map(|inner| inner.values().filter(|&p| keep(p)).cloned().collect())
            .unwrap_or_default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_code(&self, code: &str) -> Option<Product> {
        self.read()?.get(code).cloned()
    }

    fn find_all(&self) -> Vec<Product> {
        self.filtered(|_| true)
    }

    fn find_by_name(&self, name: &str) -> Vec<Product> {
        let needle = name.to_lowercase();
        self.filtered(|p| p.name.to_lowercase().contains(&needle))
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.filtered(|p| p.category.to_lowercase() == category.to_lowercase())
    }

    fn find_low_stock(&self) -> Vec<Product> {
        self.filtered(Product::is_low_stock)
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.filtered(Product::is_out_of_stock)
    }

    fn save(&self, product: &Product) -> bool {
        match self.write() {
            Some(mut inner) => {
                inner.insert(product.code.clone(), product.clone());
                true
            }
            None => false,
        }
    }

    fn update_stock(&self, code: &str, quantity: i64) -> bool {
        let Some(mut inner) = self.write() else {
            return false;
        };
        match inner.get_mut(code) {
            Some(product) => {
                product.stock = quantity;
                true
            }
            None => false,
        }
    }

    fn delete(&self, code: &str) -> bool {
        self.write()
            .is_some_and(|mut inner| inner.remove(code).is_some())
    }
}
