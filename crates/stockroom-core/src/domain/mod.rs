// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stockroom.
//!
//! This module contains pure business logic with no I/O. Persistence is
//! reached through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Only the application layer emits tracing events
//! - **Permissive entities**: Records can hold invalid values; the validator
//!   decides what is acceptable
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{Category, Product};

pub use error::DomainError;

pub use validation::{DomainValidator, ValidationRules};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn laptop() -> Product {
        Product::new("P01", "Laptop", "Elektronik", 10_000_000.0, 10, 2)
    }

    // ========================================================================
    // Code / Name Tests
    // ========================================================================

    #[test]
    fn code_accepts_alphanumerics() {
        assert!(DomainValidator::is_valid_code("P123"));
        assert!(DomainValidator::is_valid_code("ABCDE12345"));
    }

    #[test]
    fn code_rejects_blank() {
        assert!(!DomainValidator::is_valid_code(""));
        assert!(!DomainValidator::is_valid_code("   "));
    }

    #[test]
    fn code_rejects_symbols_and_overlength() {
        assert!(!DomainValidator::is_valid_code("A@#"));
        assert!(!DomainValidator::is_valid_code("!"));
        assert!(!DomainValidator::is_valid_code("P 01"));
        assert!(!DomainValidator::is_valid_code("ABCDE123456789"));
        assert!(!DomainValidator::is_valid_code("ABCDE123456"));
    }

    #[test]
    fn name_accepts_normal_text() {
        assert!(DomainValidator::is_valid_name("Laptop Asus"));
        assert!(DomainValidator::is_valid_name("Pen"));
        assert!(DomainValidator::is_valid_name(&"A".repeat(100)));
    }

    #[test]
    fn name_rejects_blank_short_and_long() {
        assert!(!DomainValidator::is_valid_name("  "));
        assert!(!DomainValidator::is_valid_name("AB"));
        assert!(!DomainValidator::is_valid_name("  AB  "));
        assert!(!DomainValidator::is_valid_name(&"A".repeat(101)));
    }

    // ========================================================================
    // Numeric Rule Tests
    // ========================================================================

    #[test]
    fn price_must_be_positive() {
        assert!(DomainValidator::is_valid_price(1000.0));
        assert!(!DomainValidator::is_valid_price(0.0));
        assert!(!DomainValidator::is_valid_price(-1.0));
    }

    #[test]
    fn stock_and_minimum_stock_allow_zero() {
        assert!(DomainValidator::is_valid_stock(0));
        assert!(DomainValidator::is_valid_stock(5));
        assert!(DomainValidator::is_valid_minimum_stock(3));
        assert!(!DomainValidator::is_valid_stock(-1));
        assert!(!DomainValidator::is_valid_minimum_stock(-2));
    }

    #[test]
    fn percentage_boundaries() {
        assert!(DomainValidator::is_valid_percentage(0.0));
        assert!(DomainValidator::is_valid_percentage(100.0));
        assert!(DomainValidator::is_valid_percentage(55.5));
        assert!(!DomainValidator::is_valid_percentage(-1.0));
        assert!(!DomainValidator::is_valid_percentage(101.0));
        assert!(!DomainValidator::is_valid_percentage(120.0));
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(DomainValidator::is_valid_quantity(5));
        assert!(!DomainValidator::is_valid_quantity(0));
        assert!(!DomainValidator::is_valid_quantity(-1));
    }

    // ========================================================================
    // Product Validation Tests
    // ========================================================================

    #[test]
    fn product_valid() {
        assert!(DomainValidator::is_valid_product(&laptop()));
    }

    #[test]
    fn product_invalid_fields_are_constructible_but_rejected() {
        let cases = [
            Product { code: "@@@".into(), ..laptop() },
            Product { name: "A".into(), ..laptop() },
            Product { category: "!".into(), ..laptop() },
            Product { price: 0.0, ..laptop() },
            Product { price: -5000.0, ..laptop() },
            Product { stock: -1, ..laptop() },
            Product { minimum_stock: -1, ..laptop() },
        ];

        for product in cases {
            assert!(
                !DomainValidator::is_valid_product(&product),
                "expected rejection for {product}"
            );
        }
    }

    #[test]
    fn check_product_names_the_failing_field() {
        let product = Product { stock: -1, ..laptop() };
        assert_eq!(
            DomainValidator::check_product(&product),
            Err(DomainError::NegativeStock(-1))
        );

        let product = Product { category: "!".into(), ..laptop() };
        assert!(matches!(
            DomainValidator::check_product(&product),
            Err(DomainError::InvalidName { field: "category", .. })
        ));
    }

    #[test]
    fn product_inactive_flag_does_not_affect_validity() {
        assert!(DomainValidator::is_valid_product(&laptop().with_active(false)));
    }

    // ========================================================================
    // Category Validation Tests
    // ========================================================================

    #[test]
    fn category_valid_with_or_without_description() {
        let with = Category::new("K01", "Elektronik").with_description("Perangkat elektronik");
        let without = Category::new("K01", "Elektronik");

        assert!(DomainValidator::is_valid_category(&with));
        assert!(DomainValidator::is_valid_category(&without));
    }

    #[test]
    fn category_rejects_bad_code_and_name() {
        assert!(!DomainValidator::is_valid_category(
            &Category::new("###", "Elektronik").with_description("Deskripsi")
        ));
        assert!(!DomainValidator::is_valid_category(
            &Category::new("K01", "A").with_description("Deskripsi pendek")
        ));
    }

    #[test]
    fn category_rejects_missing_code_or_name() {
        let no_code = Category { code: None, ..Category::new("K01", "Elektronik") };
        let no_name = Category { name: None, ..Category::new("K01", "Elektronik") };

        assert_eq!(
            DomainValidator::check_category(&no_code),
            Err(DomainError::MissingRequiredField { field: "code" })
        );
        assert!(!DomainValidator::is_valid_category(&no_name));
    }

    #[test]
    fn category_description_limit_is_inclusive() {
        let at_limit = Category::new("K01", "Elektronik").with_description("A".repeat(500));
        let over = Category::new("K01", "Elektronik").with_description("A".repeat(501));

        assert!(DomainValidator::is_valid_category(&at_limit));
        assert_eq!(
            DomainValidator::check_category(&over),
            Err(DomainError::DescriptionTooLong { length: 501, max: 500 })
        );
    }

    // ========================================================================
    // Category Entity Tests
    // ========================================================================

    #[test]
    fn category_constructor_sets_fields() {
        let category =
            Category::new("KAT001", "Elektronik").with_description("Kategori produk elektronik");

        assert_eq!(category.code(), Some("KAT001"));
        assert_eq!(category.name(), Some("Elektronik"));
        assert_eq!(category.description(), Some("Kategori produk elektronik"));
        assert!(category.active);
    }

    #[test]
    fn category_default_is_empty_and_fields_are_writable() {
        let mut category = Category::default();
        assert_eq!(category.code(), None);

        category.code = Some("KAT002".into());
        category.name = Some("Fashion".into());
        category.description = Some("Kategori pakaian".into());
        category.active = false;

        assert_eq!(category.code(), Some("KAT002"));
        assert_eq!(category.name(), Some("Fashion"));
        assert_eq!(category.description(), Some("Kategori pakaian"));
        assert!(!category.active);

        category.code = None;
        category.name = None;
        category.description = None;
        assert_eq!(category.code(), None);
        assert_eq!(category.name(), None);
        assert_eq!(category.description(), None);
    }

    #[test]
    fn category_equality_uses_code_only() {
        let a = Category::new("KAT001", "Laptop").with_description("Elektronik");
        let b = Category::new("KAT001", "Gadget").with_description("Barang teknologi");
        let c = Category::new("KAT999", "Makanan").with_description("Produk konsumsi");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());

        let set: HashSet<Category> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn category_equality_with_absent_codes() {
        let a = Category { code: None, ..Category::new("X", "Kosong") };
        let b = Category { code: None, ..Category::new("Y", "Kosong juga") };
        let c = Category::new("KAT001", "Kosong");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn category_display_includes_every_field() {
        let text = Category::new("KAT001", "Elektronik")
            .with_description("Kategori produk elektronik")
            .to_string();

        assert!(text.contains("KAT001"));
        assert!(text.contains("Elektronik"));
        assert!(text.contains("Kategori produk elektronik"));
        assert!(text.contains("active=true"));
    }

    // ========================================================================
    // Product Entity Tests
    // ========================================================================

    #[test]
    fn product_new_is_active() {
        let product = laptop();
        assert!(product.active);
        assert_eq!(product.code, "P01");
        assert_eq!(product.minimum_stock, 2);
    }

    #[test]
    fn product_stock_helpers() {
        let product = Product::new("P02", "Mouse", "Elektronik", 500_000.0, 3, 5);
        assert!(product.is_low_stock());
        assert!(!product.is_out_of_stock());
        assert_eq!(product.stock_value(), 1_500_000.0);

        let empty = Product { stock: 0, ..product };
        assert!(empty.is_out_of_stock());
    }

    #[test]
    fn stock_value_of_huge_stock_is_approximate() {
        let product = Product::new("P03", "Bolt", "Hardware", 1.0, (1 << 53) + 1, 0);
        let relative = (product.stock_value() - product.stock as f64).abs() / product.stock_value();
        assert!(relative < 1e-12);
    }

    #[test]
    fn product_display_includes_active_flag() {
        let text = laptop().with_active(false).to_string();
        assert!(text.contains("P01"));
        assert!(text.contains("active=false"));
    }

    // ========================================================================
    // Custom Rules Tests
    // ========================================================================

    #[test]
    fn custom_rules_change_limits() {
        let rules = ValidationRules {
            max_code_length: 4,
            ..ValidationRules::STANDARD
        };

        assert!(rules.is_valid_code("P001"));
        assert!(!rules.is_valid_code("P0001"));
        assert!(DomainValidator::is_valid_code("P0001"));
    }

    #[test]
    fn standard_rules_are_consistent() {
        assert!(ValidationRules::default().is_consistent());
        assert!(
            !ValidationRules {
                min_name_length: 10,
                max_name_length: 5,
                ..ValidationRules::STANDARD
            }
            .is_consistent()
        );
    }
}
