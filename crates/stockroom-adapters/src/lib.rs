//! Infrastructure adapters for Stockroom.
//!
//! This crate implements the ports defined in `stockroom-core::application::ports`
//! and carries the host-side concerns the core stays out of: settings and
//! the tracing subscriber.

pub mod config;
pub mod logging;
pub mod repository;

// Re-export commonly used adapters
pub use config::{LogFormat, LoggingConfig, Settings, SettingsError};
pub use logging::init_logging;
pub use repository::InMemoryProductRepository;
