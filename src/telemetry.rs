//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the level filter: `RUST_LOG` wins over the configured level.
/// `verbose` forces `debug` for this crate.
pub fn env_filter(logging: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = if verbose {
        format!("{},vanscout=debug", logging.level)
    } else {
        logging.level.clone()
    };
    EnvFilter::try_new(&directive).map_err(|e| anyhow!("Invalid log filter '{directive}': {e}"))
}

/// Install the global subscriber. Call once at startup.
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = env_filter(logging, verbose)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if logging.format == "json" {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
