//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stockroom-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProductRepository`: Product storage/retrieval and stock updates
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The `InventoryService` methods; no separate trait)

pub mod output;

pub use output::ProductRepository;

#[cfg(test)]
pub use output::MockProductRepository;
