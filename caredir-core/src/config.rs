use std::env;
use std::fmt;

use crate::error::{ConfigError, Result};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Database credentials, read from the environment.
///
/// Fields are passed to the driver as structured connect options, never
/// concatenated into a URL, so no value needs escaping.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Gateway configuration: database credentials plus listen port.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub db: DbConfig,
    pub port: u16,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// `DB_HOST`, `DB_USER`, `DB_PASSWORD`, and `DB_NAME` are required;
    /// `PORT` falls back to [`DEFAULT_PORT`].
    ///
    /// Fails hard with the offending variable name so the operator knows
    /// exactly what to set.
    pub fn from_env() -> Result<Self> {
        let db = DbConfig {
            host: required_var("DB_HOST")?,
            user: required_var("DB_USER")?,
            password: required_var("DB_PASSWORD")?,
            database: required_var("DB_NAME")?,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { db, port })
    }
}

fn required_var(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar { name }),
    }
}
