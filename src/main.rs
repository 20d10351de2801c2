use openmeteo_mcp::{ServerConfig, VERSION, WeatherServer, telemetry};
use rmcp::ServiceExt;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::default();
    config.validate()?;
    telemetry::init(&config.logging)?;

    info!(version = VERSION, "Starting Open-Meteo MCP server on stdio");

    let server = WeatherServer::from_config(&config.api);
    let service = server.serve(rmcp::transport::stdio()).await?;
    let reason = service.waiting().await?;

    info!(?reason, "Open-Meteo MCP server stopped");
    Ok(())
}
