//! SoilCalc
//!
//! An MCP server for soil, mulch and landscaping material calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use soilcalc::build_info;
use soilcalc::mcp::SoilCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays clean for the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("soilcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = SoilCalcService::new();

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    tracing::info!("SoilCalc MCP server ready");

    server.waiting().await?;

    Ok(())
}
