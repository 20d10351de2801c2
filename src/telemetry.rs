//! Logging setup
//!
//! Stdout carries MCP frames, so every log line goes to stderr.

use crate::config::LoggingConfig;
use crate::{Result, WeatherMcpError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber; `RUST_LOG` overrides `config.level`
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().pretty().with_ansi(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| WeatherMcpError::config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        let result = init(&config);
        assert!(result.unwrap_err().to_string().contains("Failed to initialize logging"));
    }
}
