//! MCP server exposing the weather tools
//!
//! Tool names, descriptions and parameter schemas are the public contract
//! with the host; the handlers only forward to [`WeatherTools`].

use crate::config::ApiConfig;
use crate::models::{Coordinate, ForecastRequest, LocationQuery};
use crate::tools::WeatherTools;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

/// Name the server reports during MCP initialization
pub const SERVER_NAME: &str = "weather";

/// MCP handler routing tool calls to [`WeatherTools`]
#[derive(Clone)]
pub struct WeatherServer {
    tools: WeatherTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WeatherServer {
    /// Create a new server over the given adapters
    pub fn new(tools: WeatherTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Server backed by the live Open-Meteo APIs
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(WeatherTools::from_config(config))
    }

    #[tool(description = "Get current weather for a location.")]
    async fn get_current_weather(&self, Parameters(coordinate): Parameters<Coordinate>) -> String {
        self.tools.current_weather(coordinate).await
    }

    #[tool(description = "Get forecasted weather for a location.")]
    async fn get_forecast(&self, Parameters(request): Parameters<ForecastRequest>) -> String {
        self.tools.forecast(&request).await
    }

    #[tool(description = "Search for location.")]
    async fn get_location(&self, Parameters(query): Parameters<LocationQuery>) -> String {
        self.tools.location(&query).await
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Open-Meteo weather tools. Use get_location to resolve a place name to \
                 coordinates, then get_current_weather or get_forecast with its latitude \
                 and longitude. Results are the raw Open-Meteo JSON."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
