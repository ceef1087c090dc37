use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    success: bool,
    message: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses (
        (status = 200, description = "Backend is running", body = HealthResponse),
    ),
    tag = "health"
)]
// axum handler for health
pub async fn health() -> impl IntoResponse {
    debug!("Health check requested");

    Json(HealthResponse {
        success: true,
        message: "Backend is running successfully".to_string(),
    })
}
