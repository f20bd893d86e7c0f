/// Structured error types for caredir-core.
///
/// Uses `thiserror` for composable errors. The binary crate (caredir-cli)
/// wraps these in `anyhow` for convenience.
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable {name}")]
    MissingVar { name: &'static str },

    /// An environment variable is set but cannot be parsed
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Result type alias for caredir-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;
