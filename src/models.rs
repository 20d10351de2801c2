//! Request and result shapes shared by the query builders, the fetcher and
//! the MCP tools
//!
//! Every value here lives for exactly one tool invocation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// A decoded upstream JSON object, keys in upstream order
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Outcome of a single fetch: the decoded body, or nothing
pub type FetchResult = Option<JsonObject>;

/// Text handed back to the MCP host: a failure sentence or the JSON payload
pub type ToolOutcome = String;

/// Location coordinates, forwarded upstream without range checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Multi-day forecast request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ForecastRequest {
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,
    /// Number of forecast days; the upstream service defines the valid range
    #[serde(default = "default_forecast_days")]
    #[schemars(description = "Days in the future")]
    pub days: i64,
}

impl ForecastRequest {
    /// Create a new forecast request
    #[must_use]
    pub fn new(coordinate: Coordinate, days: i64) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            days,
        }
    }

    /// Coordinate part of the request
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Geocoding search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LocationQuery {
    #[schemars(description = "String to search for, city, country, etc")]
    pub search_term: String,
    #[serde(default = "default_location_count")]
    #[schemars(description = "Number of search results to return")]
    pub count: i64,
}

impl LocationQuery {
    /// Create a new geocoding query
    #[must_use]
    pub fn new(search_term: impl Into<String>, count: i64) -> Self {
        Self {
            search_term: search_term.into(),
            count,
        }
    }
}

/// Default number of forecast days
pub const DEFAULT_FORECAST_DAYS: i64 = 7;

/// Default number of geocoding results
pub const DEFAULT_LOCATION_COUNT: i64 = 10;

fn default_forecast_days() -> i64 {
    DEFAULT_FORECAST_DAYS
}

fn default_location_count() -> i64 {
    DEFAULT_LOCATION_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forecast_request_defaults_days() {
        let request: ForecastRequest =
            serde_json::from_value(json!({"latitude": 0, "longitude": 0})).unwrap();
        assert_eq!(request.days, 7);
        assert_eq!(request.coordinate(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_location_query_defaults_count() {
        let query: LocationQuery =
            serde_json::from_value(json!({"search_term": "Berlin"})).unwrap();
        assert_eq!(query, LocationQuery::new("Berlin", 10));
    }

    #[test]
    fn test_out_of_range_values_are_accepted() {
        let request: ForecastRequest =
            serde_json::from_value(json!({"latitude": 123.0, "longitude": -500.0, "days": -3}))
                .unwrap();
        assert_eq!(request.days, -3);
        assert_eq!(request.latitude, 123.0);
    }

    #[test]
    fn test_location_query_requires_search_term() {
        let result = serde_json::from_value::<LocationQuery>(json!({"count": 5}));
        assert!(result.is_err());
    }
}
