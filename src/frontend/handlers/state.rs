use super::page::with_session;
use crate::frontend::session::Sessions;
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Json, Response},
};

// axum handler exposing the caller's stored page state as JSON
pub async fn state(headers: HeaderMap, sessions: Extension<Sessions>) -> Response {
    let session = sessions.resolve(&headers).await;
    let page = session.controller.snapshot().await;
    with_session(&session, Json(page))
}
