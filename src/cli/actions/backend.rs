use crate::backend;
use anyhow::Result;
use std::{
    net::{Ipv6Addr, SocketAddr},
    path::PathBuf,
};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub users_file: PathBuf,
}

/// Execute the backend action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        port = args.port,
        users_file = %args.users_file.display(),
        "Starting backend"
    );

    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, args.port));
    backend::new(addr, &args.users_file).await
}
