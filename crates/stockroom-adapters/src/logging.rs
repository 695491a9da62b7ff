//! Tracing subscriber initialisation.
//!
//! Only the host is expected to call [`init_logging`]; `stockroom-core`
//! only *emits* spans and events, it never touches subscribers.
//!
//! `RUST_LOG` overrides the configured level if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Crates whose events the default filter lets through.
const CRATES: [&str; 2] = ["stockroom_core", "stockroom_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called at most once per process. A second call returns an error
/// instead of panicking.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let use_ansi = config.ansi && std::io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Build the filter string applying `level` to every stockroom crate.
fn filter_directives(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
