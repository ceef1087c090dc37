//! JSON user API. Users are loaded once from a file and served read-only.

use crate::{
    model::{ErrorCode, FailureEnvelope},
    server,
};
use anyhow::Result;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};
use std::{any::Any as PanicPayload, net::SocketAddr, path::Path};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing::error;

pub mod handlers;
pub mod openapi;
pub mod store;

pub use self::store::UserStore;

/// Builds the API router over `store`.
#[must_use]
pub fn router(store: UserStore) -> Router {
    with_api_layers(
        Router::new()
            .route("/api/users", get(handlers::get_all_users))
            .route("/api/users/:id", get(handlers::get_user_by_id))
            .route("/api/health", get(handlers::health))
            .route("/api/openapi.json", get(openapi::openapi_json))
            .fallback(handlers::not_found),
    )
    .layer(Extension(store))
}

/// CORS for browser callers and a JSON 500 envelope for handler panics.
fn with_api_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        // allow `GET` when accessing the resource
        .allow_methods([Method::GET])
        // allow requests from any origin
        .allow_origin(Any);

    router
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(cors)
}

fn internal_error(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("500 Error - Internal server error: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureEnvelope::new(
            ErrorCode::Internal,
            "Internal server error",
        )),
    )
        .into_response()
}

/// Loads users from `users_file` and serves the API on `addr`.
/// # Errors
/// Returns an error if the server fails to start
pub async fn new(addr: SocketAddr, users_file: &Path) -> Result<()> {
    let store = UserStore::load(users_file);

    server::serve(addr, router(store)).await
}
