//! Page routes. Each route is one UI event for the caller's session: it runs
//! the matching controller flow to completion and renders the page that flow
//! produced.

use crate::{
    frontend::session::{Session, Sessions},
    view::{render_page, UiEvent},
};
use axum::{
    extract::{Extension, Query},
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, instrument};

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    #[serde(default)]
    id: String,
}

// axum handler for page load
pub async fn index(headers: HeaderMap, sessions: Extension<Sessions>) -> Response {
    let session = sessions.resolve(&headers).await;
    let page = session.controller.dispatch(UiEvent::PageLoaded).await;
    with_session(&session, Html(render_page(&page)))
}

// axum handler for the search form (button or Enter key)
#[instrument(skip(headers, sessions))]
pub async fn search(
    headers: HeaderMap,
    sessions: Extension<Sessions>,
    Query(params): Query<SearchParams>,
) -> Response {
    let session = sessions.resolve(&headers).await;
    let page = session.controller.search(&params.id).await;
    with_session(&session, Html(render_page(&page)))
}

// axum handler for the clear button
pub async fn clear(headers: HeaderMap, sessions: Extension<Sessions>) -> Response {
    let session = sessions.resolve(&headers).await;
    let page = session.controller.dispatch(UiEvent::ClearClicked).await;
    with_session(&session, Html(render_page(&page)))
}

// axum handler for the refresh button
pub async fn refresh(headers: HeaderMap, sessions: Extension<Sessions>) -> Response {
    let session = sessions.resolve(&headers).await;
    let page = session.controller.dispatch(UiEvent::RefreshClicked).await;
    with_session(&session, Html(render_page(&page)))
}

/// Attaches the session cookie when the session was just created.
pub(crate) fn with_session(session: &Session, body: impl IntoResponse) -> Response {
    let mut headers = HeaderMap::new();
    match session.cookie() {
        Ok(Some(cookie)) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Ok(None) => {}
        Err(err) => error!("Failed to set session cookie: {err}"),
    }
    (headers, body).into_response()
}
