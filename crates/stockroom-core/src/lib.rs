//! Stockroom Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for a small
//! inventory system, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Host application / tests         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (InventoryService)            │
//! │     Stock rules, lookups, valuation     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (ProductRepository)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stockroom-adapters (Infrastructure)   │
//! │       (InMemoryProductRepository)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Product, Category, DomainValidator)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::prelude::*;
//!
//! let service = InventoryService::new(Box::new(repository));
//!
//! let laptop = Product::new("P01", "Laptop", "Electronics", 1_200.0, 0, 2);
//! assert!(service.add_product(&laptop));
//! assert!(service.stock_in("P01", 10));
//! assert_eq!(service.total_stock(), 10);
//! ```

// Domain layer (entities and validation)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{InventoryService, ports::ProductRepository};
    pub use crate::domain::{Category, DomainValidator, Product, ValidationRules};
    pub use crate::error::{StockroomError, StockroomResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
