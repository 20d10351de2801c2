//! Tool adapters: build the URL, fetch it, render the outcome
//!
//! These functions never fail. A missing or empty upstream payload becomes a
//! fixed sentence per tool.

use crate::config::ApiConfig;
use crate::fetcher::{Fetch, HttpFetcher};
use crate::models::{Coordinate, ForecastRequest, LocationQuery, ToolOutcome};
use crate::outcome::render;
use crate::query::Endpoints;
use std::sync::Arc;
use tracing::instrument;

/// Returned by `get_current_weather` when no data could be fetched
pub const CURRENT_WEATHER_FAILURE: &str = "Unable to fetch current weather data for this location.";

/// Returned by `get_forecast` when no data could be fetched
pub const FORECAST_FAILURE: &str = "Unable to fetch forecasted weather data for this location.";

/// Sentence returned by `get_location` when no data could be fetched
#[must_use]
pub fn location_failure(search_term: &str) -> String {
    format!("Unable to fetch location data for {search_term}")
}

/// The three Open-Meteo adapters behind one fetcher
#[derive(Clone)]
pub struct WeatherTools {
    endpoints: Endpoints,
    fetcher: Arc<dyn Fetch>,
}

impl WeatherTools {
    /// Create new adapters from endpoints and a fetcher
    pub fn new(endpoints: Endpoints, fetcher: Arc<dyn Fetch>) -> Self {
        Self { endpoints, fetcher }
    }

    /// Adapters talking HTTP to the configured endpoints
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            Endpoints::from_config(config),
            Arc::new(HttpFetcher::new(config)),
        )
    }

    #[instrument(skip(self))]
    pub async fn current_weather(&self, coordinate: Coordinate) -> ToolOutcome {
        let url = self.endpoints.current_weather_url(coordinate);
        let data = self.fetcher.fetch(&url).await;
        render(data, || CURRENT_WEATHER_FAILURE.to_string())
    }

    #[instrument(skip(self))]
    pub async fn forecast(&self, request: &ForecastRequest) -> ToolOutcome {
        let url = self.endpoints.forecast_url(request);
        let data = self.fetcher.fetch(&url).await;
        render(data, || FORECAST_FAILURE.to_string())
    }

    #[instrument(skip(self))]
    pub async fn location(&self, query: &LocationQuery) -> ToolOutcome {
        let url = self.endpoints.location_url(query);
        let data = self.fetcher.fetch(&url).await;
        render(data, || location_failure(&query.search_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FetchResult, JsonObject};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Replays one canned result and records every requested URL
    struct StubFetcher {
        response: FetchResult,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(response: Option<Value>) -> Arc<Self> {
            Arc::new(Self {
                response: response.map(|v| v.as_object().cloned().unwrap()),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> FetchResult {
            self.requested.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }

    fn tools(stub: &Arc<StubFetcher>) -> WeatherTools {
        WeatherTools::new(Endpoints::default(), stub.clone())
    }

    #[tokio::test]
    async fn test_current_weather_passes_payload_through() {
        let stub = StubFetcher::new(Some(json!({"current": {"temperature_2m": 18.3}})));
        let text = tools(&stub)
            .current_weather(Coordinate::new(52.52, 13.405))
            .await;

        assert_eq!(text, r#"{"current": {"temperature_2m": 18.3}}"#);
        let urls = stub.urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with(
            "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.405&current="
        ));
    }

    #[tokio::test]
    async fn test_current_weather_failure_sentence() {
        let stub = StubFetcher::new(None);
        let text = tools(&stub).current_weather(Coordinate::new(0.0, 0.0)).await;
        assert_eq!(text, CURRENT_WEATHER_FAILURE);
    }

    #[tokio::test]
    async fn test_forecast_default_days_in_url() {
        let stub = StubFetcher::new(Some(json!({"daily": {"time": ["2024-06-01"]}})));
        let request: ForecastRequest =
            serde_json::from_value(json!({"latitude": 0, "longitude": 0})).unwrap();
        let text = tools(&stub).forecast(&request).await;

        assert_eq!(text, r#"{"daily": {"time": ["2024-06-01"]}}"#);
        let urls = stub.urls();
        let url = &urls[0];
        assert!(url.contains("latitude=0&longitude=0&forecast_days=7&"));
        assert!(url.ends_with("&timezone=auto"));
    }

    #[tokio::test]
    async fn test_forecast_failure_sentence() {
        let stub = StubFetcher::new(None);
        let request = ForecastRequest::new(Coordinate::new(1.0, 2.0), 3);
        assert_eq!(tools(&stub).forecast(&request).await, FORECAST_FAILURE);
    }

    #[tokio::test]
    async fn test_location_failure_names_search_term() {
        let stub = StubFetcher::new(None);
        let text = tools(&stub)
            .location(&LocationQuery::new("Nowhere12345xyz", 5))
            .await;

        assert_eq!(text, "Unable to fetch location data for Nowhere12345xyz");
        assert_eq!(
            stub.urls(),
            vec!["https://geocoding-api.open-meteo.com/v1/search?name=Nowhere12345xyz&count=5"]
        );
    }

    #[tokio::test]
    async fn test_location_round_trips_payload() {
        let body = json!({
            "results": [{
                "id": 2950159,
                "name": "Berlin",
                "latitude": 52.52437,
                "longitude": 13.41053,
                "country": "Deutschland",
                "admin1": "Land Berlin"
            }],
            "generationtime_ms": 0.92
        });
        let stub = StubFetcher::new(Some(body.clone()));
        let text = tools(&stub).location(&LocationQuery::new("Berlin", 1)).await;

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, body);
    }

    #[tokio::test]
    async fn test_empty_object_counts_as_failure() {
        let stub = StubFetcher::new(Some(Value::Object(JsonObject::new())));
        let text = tools(&stub).location(&LocationQuery::new("Atlantis", 10)).await;
        assert_eq!(text, location_failure("Atlantis"));
    }
}
