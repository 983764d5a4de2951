//! Wellcheck
//!
//! An MCP server hosting a guided health check.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use wellcheck::build_info::BuildInfo;
use wellcheck::config::Config;
use wellcheck::mcp::WellcheckService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wellcheck=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    // Print startup banner to stderr
    eprintln!("{}", BuildInfo::for_config(&config).banner());
    eprintln!("Starting MCP server on stdio...");

    // Create the Wellcheck service
    let service = WellcheckService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
