//! Server-rendered user directory page.
//!
//! Every visitor gets its own page state, keyed by a session cookie, so the
//! list and search views persist between one browser's requests and never
//! leak into another's.

use crate::{client::ApiClient, config::ClientConfig, server};
use anyhow::{Context, Result};
use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use tracing::info;

pub mod handlers;
pub mod session;

pub use self::session::{Session, Sessions, SESSION_COOKIE_NAME};

#[must_use]
pub fn router(sessions: Sessions) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/clear", get(handlers::clear))
        .route("/refresh", get(handlers::refresh))
        .route("/state", get(handlers::state))
        .route("/health", get(handlers::health))
        .layer(Extension(sessions))
}

/// Builds the API client from `config` and serves the page on `addr`.
/// # Errors
/// Returns an error if the configuration is invalid or the server fails to start
pub async fn new(addr: SocketAddr, config: &ClientConfig) -> Result<()> {
    let client = ApiClient::new(config).context("Invalid API client configuration")?;

    info!("Using API base URL {}", client.base_url());

    server::serve(addr, router(Sessions::new(client))).await
}
