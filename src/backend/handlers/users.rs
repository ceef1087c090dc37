use crate::{
    backend::{handlers::not_found, store::UserStore},
    model::{is_digits, ErrorCode, FailureEnvelope, User},
};
use axum::{
    extract::{ConnectInfo, Extension, Path},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{info, warn};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UsersResponse {
    pub success: bool,
    pub data: Vec<User>,
    pub count: usize,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses (
        (status = 200, description = "All users", body = UsersResponse),
    ),
    tag = "users"
)]
// axum handler for the user list
pub async fn get_all_users(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    store: Extension<UserStore>,
) -> impl IntoResponse {
    info!(
        "GET /api/users - All users requested by {}",
        client_ip(connect_info.as_ref())
    );

    let data = store.all().to_vec();
    Json(UsersResponse {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = u64, Path, description = "User id")
    ),
    responses (
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = FailureEnvelope),
    ),
    tag = "users"
)]
// axum handler for a single user
pub async fn get_user_by_id(
    uri: Uri,
    Path(raw_id): Path<String>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    store: Extension<UserStore>,
) -> Response {
    // Only unsigned digit runs match the route; anything else is an unknown path.
    if !is_digits(&raw_id) {
        return not_found(uri).await.into_response();
    }

    let client_ip = client_ip(connect_info.as_ref());
    let user_id = canonical_id(&raw_id);
    info!("GET /api/users/{user_id} - User ID {user_id} searched by {client_ip}");

    // Ids beyond u64 cannot be stored, so they are simply not found.
    if let Some(user) = user_id.parse::<u64>().ok().and_then(|id| store.find(id)) {
        info!("User ID {user_id} found - Name: {}", user.name);
        Json(UserResponse {
            success: true,
            data: user.clone(),
        })
        .into_response()
    } else {
        warn!("User ID {user_id} not found - Requested by {client_ip}");
        (
            StatusCode::NOT_FOUND,
            Json(FailureEnvelope::new(
                ErrorCode::NotFound,
                format!("User with ID {user_id} not found"),
            )),
        )
            .into_response()
    }
}

/// Digits without leading zeros, so `007` and `7` name the same user.
fn canonical_id(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        id => id,
    }
}

fn client_ip(connect_info: Option<&ConnectInfo<SocketAddr>>) -> String {
    connect_info.map_or_else(|| "unknown".to_string(), |info| info.0.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    fn store() -> UserStore {
        UserStore::new(vec![User {
            id: 3,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
        }])
    }

    async fn body_json(response: Response) -> Result<Value> {
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    #[tokio::test]
    async fn list_returns_envelope_with_count() -> Result<()> {
        let response = get_all_users(None, Extension(store())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await?,
            json!({
                "success": true,
                "count": 1,
                "data": [{"id": 3, "name": "Ann", "email": "a@x.com", "age": 30}]
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn known_id_returns_user() -> Result<()> {
        let response = get_user_by_id(
            Uri::from_static("/api/users/3"),
            Path("3".to_string()),
            None,
            Extension(store()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?["data"]["name"], "Ann");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_returns_not_found_code() -> Result<()> {
        let response = get_user_by_id(
            Uri::from_static("/api/users/9"),
            Path("9".to_string()),
            None,
            Extension(store()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await?,
            json!({
                "success": false,
                "message": "User with ID 9 not found",
                "code": "not_found"
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn non_integer_id_is_route_not_found() -> Result<()> {
        for raw in ["abc", "+3", "-3", "3.0"] {
            let response = get_user_by_id(
                Uri::from_static("/api/users/x"),
                Path(raw.to_string()),
                None,
                Extension(store()),
            )
            .await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {raw:?}");
            assert_eq!(body_json(response).await?["code"], "route_not_found", "id {raw:?}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn id_beyond_u64_is_user_not_found() -> Result<()> {
        let response = get_user_by_id(
            Uri::from_static("/api/users/99999999999999999999"),
            Path("99999999999999999999".to_string()),
            None,
            Extension(store()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await?,
            json!({
                "success": false,
                "message": "User with ID 99999999999999999999 not found",
                "code": "not_found"
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn leading_zeros_name_the_same_user() -> Result<()> {
        let response = get_user_by_id(
            Uri::from_static("/api/users/003"),
            Path("003".to_string()),
            None,
            Extension(store()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await?["data"]["id"], 3);
        Ok(())
    }
}
