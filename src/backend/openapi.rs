use super::handlers::{health, users};
use crate::model::{FailureEnvelope, User};
use axum::response::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(users::get_all_users, users::get_user_by_id, health::health),
    components(schemas(
        User,
        users::UsersResponse,
        users::UserResponse,
        health::HealthResponse,
        FailureEnvelope
    )),
    tags(
        (name = "users", description = "User directory"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

// axum handler serving the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
