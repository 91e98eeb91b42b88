//! Okta MCP stdio server
//!
//! Reads `OKTA_DOMAIN` and `API_TOKEN` from the environment and serves the
//! Okta tools over stdin/stdout. Logs go to stderr; set `RUST_LOG` to change
//! the level.
//!
//! ```bash
//! OKTA_DOMAIN=dev-123456.okta.com API_TOKEN=00... cargo run --bin okta-mcp-server
//! ```

use log::{error, info};
use okta_mcp_server::{OktaConfig, OktaMcpServer};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();

    let config = match OktaConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let server = match OktaMcpServer::from_config(&config) {
        Ok(server) => server,
        Err(err) => {
            error!("Unable to create Okta client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "{} {} serving {} tools for {}",
        server.server_info().name,
        server.server_info().version,
        server.get_tools().len(),
        config.domain
    );

    match server.run_stdio().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Server error: {}", err);
            ExitCode::FAILURE
        }
    }
}
