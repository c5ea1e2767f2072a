//! Subscriber setup for test runs.
//!
//! Library code only emits events; a test harness calls [`init_logging`] once
//! at startup to decide where they go.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::LoggingError;

/// Installs the global subscriber and routes `log` records into it.
///
/// `RUST_LOG` overrides the configured level when it is set and valid.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let configured = EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
        filter: config.level.clone(),
        reason: e.to_string(),
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => tracing::subscriber::set_global_default(registry.with(fmt::layer())),
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))
        }
    }
    .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing_log::LogTracer::init().map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}
