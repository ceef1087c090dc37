pub mod health;
pub use self::health::health;

pub mod users;
pub use self::users::{get_all_users, get_user_by_id};

use crate::model::{ErrorCode, FailureEnvelope};
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use tracing::warn;

/// Fallback for any path without a route.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!("404 Error - Endpoint not found: {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(FailureEnvelope::new(
            ErrorCode::RouteNotFound,
            "Endpoint not found",
        )),
    )
}
