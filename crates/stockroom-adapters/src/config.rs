//! Settings for hosts embedding Stockroom.
//!
//! [`Settings`] is loaded once at startup and passed down by value. The
//! adapters crate owns settings; the core crate only sees the
//! [`ValidationRules`] handed to `InventoryService::with_rules`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `STOCKROOM__<SECTION>__<KEY>`
//! 2. Config file (TOML, optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use stockroom_core::domain::ValidationRules;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STOCKROOM";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Host settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length limits for codes, names and descriptions.
    pub validation: ValidationRules,
    /// Logging output.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter level applied to the stockroom crates when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

impl Settings {
    /// Load settings, starting from defaults.
    ///
    /// `config_file` is read when given and must exist. Environment variables
    /// are always applied last.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the service would refuse anyway.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.validation.is_consistent() {
            return Err(SettingsError::Invalid(format!(
                "validation limits are inconsistent: {:?}",
                self.validation
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::Invalid("logging level is empty".into()));
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stockroom.toml` in the current directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stockroom.toml"))
    }
}
