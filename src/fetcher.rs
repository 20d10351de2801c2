//! HTTP fetcher for the Open-Meteo APIs
//!
//! One GET per call, no retries. Every failure (transport, status, body) is
//! logged here and collapsed into `None`; callers never see an error.

use crate::config::ApiConfig;
use crate::models::{FetchResult, JsonObject};
use crate::{Result, WeatherMcpError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

/// Something that can resolve a URL into a JSON object
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url`; `None` on any failure
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// [`Fetch`] implementation over HTTP with a client scoped to each call
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from API settings
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }

    fn client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(WeatherMcpError::client)
    }

    /// The fallible request; the client is dropped on every return path
    async fn try_fetch(&self, url: &str) -> Result<JsonObject> {
        let client = self.client()?;
        let start_time = Instant::now();

        let response = client.get(url).send().await?;
        let status = response.status();
        debug!(
            %status,
            "HTTP response received in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            return Err(WeatherMcpError::status(status));
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<Value>(&body)? {
            Value::Object(object) => Ok(object),
            other => Err(WeatherMcpError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> FetchResult {
        debug!("Open-Meteo request");

        match self.try_fetch(url).await {
            Ok(object) => Some(object),
            Err(e) => {
                error!(kind = e.kind(), "Open-Meteo request failed: {}", e);
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
