//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the report on stdout.

use crate::config::LoggingConfig;
use crate::{NwsError, Result};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| NwsError::config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| NwsError::config(format!("Failed to initialise logging: {e}")))
}
