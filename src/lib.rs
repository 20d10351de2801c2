//! `openmeteo-mcp` - Open-Meteo weather tools for MCP hosts
//!
//! Exposes current conditions, daily forecasts and geocoding search as MCP
//! tools over stdio. Upstream JSON is passed through unchanged; any failure
//! becomes a short sentence instead of an error.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod outcome;
pub mod query;
pub mod server;
pub mod telemetry;
pub mod tools;

// Re-export core types for public API
pub use config::{ApiConfig, LoggingConfig, ServerConfig};
pub use error::WeatherMcpError;
pub use fetcher::{Fetch, HttpFetcher};
pub use models::{Coordinate, FetchResult, ForecastRequest, JsonObject, LocationQuery, ToolOutcome};
pub use query::Endpoints;
pub use server::WeatherServer;
pub use tools::WeatherTools;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
