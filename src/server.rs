//! Shared HTTP plumbing for both services: request-id tagging, request
//! tracing and graceful shutdown.

use anyhow::Result;
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, set_header::SetRequestHeaderLayer, trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps a router with request-id and tracing layers.
#[must_use]
pub fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::if_not_present(
                HeaderName::from_static(REQUEST_ID_HEADER),
                |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(TraceLayer::new_for_http().make_span_with(make_span)),
    )
}

/// Binds `addr` and serves `router` until Ctrl-C.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        with_layers(router).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Gracefully shutdown");
    }
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() -> Result<()> {
        let app = with_layers(Router::new().route("/", get(|| async { "ok" })));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(Ulid::from_string(request_id).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn caller_request_id_is_kept() -> Result<()> {
        let app = with_layers(Router::new().route("/", get(|| async { "ok" })));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER),
            Some(&HeaderValue::from_static("abc-123"))
        );
        Ok(())
    }
}
