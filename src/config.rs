//! Application configuration loaded from environment variables.
//!
//! The ingestion app id used to live in a mutable plugin option; here it is
//! explicit configuration read once at startup and passed to the transport
//! layer.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS (the map page)
    pub frontend_url: String,
    /// Shared app identifier required on ingestion requests
    pub app_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            app_id: env::var("GPSPLOTTER_APP_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GPSPLOTTER_APP_ID"))?,
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            app_id: "test-app-id".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("GPSPLOTTER_APP_ID", "my-tracker");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.app_id, "my-tracker");
        assert_eq!(config.port, 8080);
    }
}
