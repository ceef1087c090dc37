use crate::{config::ClientConfig, frontend};
use anyhow::Result;
use std::net::{Ipv6Addr, SocketAddr};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub config: ClientConfig,
}

/// Execute the frontend action.
/// # Errors
/// Returns an error if the client configuration is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        port = args.port,
        api_base_url = %args.config.api_base_url,
        gateway_url = %args.config.gateway_url,
        timeout_ms = args.config.request_timeout.as_millis(),
        "Starting frontend"
    );

    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, args.port));
    frontend::new(addr, &args.config).await
}
