//! Error types for the Open-Meteo MCP server
//!
//! Nothing in here crosses the tool boundary: the fetcher logs these and
//! collapses them into an absent result. They exist so the failure cause is
//! typed until the moment it is logged.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the weather adapter
#[derive(Error, Debug)]
pub enum WeatherMcpError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The per-call HTTP client could not be built
    #[error("HTTP client error: {source}")]
    Client { source: reqwest::Error },

    /// DNS, connect, timeout and body read failures
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status}")]
    Status { status: StatusCode },

    /// Body was not valid JSON
    #[error("Invalid JSON body: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// Body was valid JSON but not an object
    #[error("Expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

impl WeatherMcpError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap a client construction failure
    #[must_use]
    pub fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    /// Create an error for a non-success HTTP status
    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        Self::Status { status }
    }

    /// Short machine-friendly label, used as a structured log field
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherMcpError::Config { .. } => "config",
            WeatherMcpError::Client { .. } => "client",
            WeatherMcpError::Transport { source } if source.is_timeout() => "timeout",
            WeatherMcpError::Transport { .. } => "transport",
            WeatherMcpError::Status { .. } => "status",
            WeatherMcpError::Decode { .. } => "decode",
            WeatherMcpError::NotAnObject { .. } => "not_an_object",
        }
    }
}
