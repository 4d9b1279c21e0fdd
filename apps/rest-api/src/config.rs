//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so `cargo run -p stockroom-api` works out of the box.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: String,

    /// Path to the SQLite database file.
    pub database_path: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable              | Default               |
    /// |-----------------------|-----------------------|
    /// | `STOCKROOM_BIND_ADDR` | `0.0.0.0:8000`        |
    /// | `STOCKROOM_DB_PATH`   | `./stockroom.db`      |
    pub fn load() -> Result<Self, ConfigError> {
        let bind_addr = env::var("STOCKROOM_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        // Reject obviously broken addresses at startup rather than at bind time
        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue("STOCKROOM_BIND_ADDR".to_string()));
        }

        let database_path =
            env::var("STOCKROOM_DB_PATH").unwrap_or_else(|_| "./stockroom.db".to_string());

        Ok(ApiConfig {
            bind_addr,
            database_path,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        // Clear the vars first so the test holds even when the invoking
        // shell exports them
        env::remove_var("STOCKROOM_BIND_ADDR");
        env::remove_var("STOCKROOM_DB_PATH");

        let config = ApiConfig::load().unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.database_path, "./stockroom.db");
    }
}
