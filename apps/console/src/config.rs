//! Console configuration from environment variables.

use thiserror::Error;

/// Default API endpoint when `STOCKROOM_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Runtime configuration for the console binary.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the Stockroom REST API.
    pub api_url: String,
}

impl ConsoleConfig {
    /// Loads configuration from the environment, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let api_url =
            std::env::var("STOCKROOM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "STOCKROOM_API_URL".to_string(),
                reason: format!("'{api_url}' is not an http(s) URL"),
            });
        }

        Ok(Self { api_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_is_http() {
        assert!(DEFAULT_API_URL.starts_with("http://"));
    }
}
