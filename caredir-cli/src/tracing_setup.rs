//! Tracing setup for the caredir CLI
//!
//! Usage:
//!   caredir --debug ...              # Debug logging to console
//!   RUST_LOG=caredir=debug caredir   # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

/// Initialize tracing with console output
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = if config.debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
