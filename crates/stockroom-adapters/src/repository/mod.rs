//! Product repository adapters.

pub mod memory;

pub use memory::InMemoryProductRepository;
