//! Open-Meteo request URL builders
//!
//! Pure functions from request parameters to absolute URLs. Parameters go
//! through [`QueryUrl`], which percent-encodes every key and value so free
//! text such as a geocoding search term cannot break the query string.

use crate::config::ApiConfig;
use crate::models::{Coordinate, ForecastRequest, LocationQuery};
use std::fmt::Display;

/// Variables requested in the `current` block, in upstream contract order
pub const CURRENT_FIELDS: [&str; 15] = [
    "temperature_2m",
    "is_day",
    "showers",
    "cloud_cover",
    "wind_speed_10m",
    "wind_direction_10m",
    "pressure_msl",
    "snowfall",
    "precipitation",
    "relative_humidity_2m",
    "apparent_temperature",
    "rain",
    "weather_code",
    "surface_pressure",
    "wind_gusts_10m",
];

/// Daily aggregates requested for forecasts, in upstream contract order
pub const DAILY_FIELDS: [&str; 11] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "rain_sum",
    "snowfall_sum",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "wind_direction_10m_dominant",
    "weathercode",
    "sunrise",
    "sunset",
];

/// Incrementally built `base/path?k=v&...` URL
#[derive(Debug, Clone)]
pub struct QueryUrl {
    url: String,
    has_query: bool,
}

impl QueryUrl {
    /// Start a URL at `path` below `base`; a trailing slash on `base` is ignored
    #[must_use]
    pub fn new(base: &str, path: &str) -> Self {
        Self {
            url: format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
            has_query: false,
        }
    }

    /// Append `key=value`, encoding both
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.push_key(key);
        self.url.push_str(&urlencoding::encode(&value.to_string()));
        self
    }

    /// Append `key=a,b,c`; items are encoded one by one, commas stay literal
    #[must_use]
    pub fn list(mut self, key: &str, values: &[&str]) -> Self {
        self.push_key(key);
        let encoded: Vec<_> = values.iter().map(|v| urlencoding::encode(v)).collect();
        self.url.push_str(&encoded.join(","));
        self
    }

    fn push_key(&mut self, key: &str) {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.url.push_str(&urlencoding::encode(key));
        self.url.push('=');
    }

    /// Finish and return the URL
    #[must_use]
    pub fn build(self) -> String {
        self.url
    }
}

/// The two Open-Meteo services the tools talk to
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    forecast_base: String,
    geocoding_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

impl Endpoints {
    /// Create endpoints from the two service base URLs
    #[must_use]
    pub fn new(forecast_base: impl Into<String>, geocoding_base: impl Into<String>) -> Self {
        Self {
            forecast_base: forecast_base.into(),
            geocoding_base: geocoding_base.into(),
        }
    }

    /// Endpoints configured in [`ApiConfig`]
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.forecast_base_url, &config.geocoding_base_url)
    }

    /// Current conditions for a coordinate
    #[must_use]
    pub fn current_weather_url(&self, coordinate: Coordinate) -> String {
        QueryUrl::new(&self.forecast_base, "forecast")
            .param("latitude", coordinate.latitude)
            .param("longitude", coordinate.longitude)
            .list("current", &CURRENT_FIELDS)
            .build()
    }

    /// Daily forecast for `request.days` days in the location's own timezone
    #[must_use]
    pub fn forecast_url(&self, request: &ForecastRequest) -> String {
        QueryUrl::new(&self.forecast_base, "forecast")
            .param("latitude", request.latitude)
            .param("longitude", request.longitude)
            .param("forecast_days", request.days)
            .list("daily", &DAILY_FIELDS)
            .param("timezone", "auto")
            .build()
    }

    /// Geocoding search by free-text name
    #[must_use]
    pub fn location_url(&self, query: &LocationQuery) -> String {
        QueryUrl::new(&self.geocoding_base, "search")
            .param("name", &query.search_term)
            .param("count", query.count)
            .build()
    }
}
