//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "take stock out" or "value the inventory".

pub mod inventory_service;

pub use inventory_service::InventoryService;
