//! Application layer for Stockroom.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InventoryService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Field rules live in `crate::domain`; the stock rules (duplicates, active
//! flag, sufficient stock, removal at zero) are enforced here.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::InventoryService;

// Re-export port traits (for adapter implementation)
pub use ports::ProductRepository;

pub use error::ApplicationError;
