//! Configuration for the Open-Meteo MCP server
//!
//! The process takes no flags and reads no files; it always runs with
//! [`ServerConfig::default`]. The struct keeps the upstream constants in one
//! place and lets tests aim the fetcher at a local server.

use crate::WeatherMcpError;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Upstream API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream Open-Meteo API settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the forecast / current conditions service
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Base URL of the geocoding service
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Value of the `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_user_agent() -> String {
    "weather-app/1.0".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Per-request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl ServerConfig {
    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_api()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_api(&self) -> crate::Result<()> {
        for (name, url) in [
            ("forecast", &self.api.forecast_base_url),
            ("geocoding", &self.api.geocoding_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherMcpError::config(format!(
                    "The {name} base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                )));
            }
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(WeatherMcpError::config("User agent cannot be empty"));
        }

        if self.api.timeout_seconds == 0 {
            return Err(WeatherMcpError::config("Request timeout must be at least 1 second"));
        }

        if self.api.timeout_seconds > 300 {
            return Err(WeatherMcpError::config(
                "Request timeout cannot exceed 300 seconds",
            ));
        }

        Ok(())
    }

    fn validate_logging(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherMcpError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherMcpError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}
