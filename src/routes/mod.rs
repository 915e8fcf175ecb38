//! HTTP route handlers.
//!
//! Routes are registered explicitly: a fixed mapping from (method, path) to
//! handler, built once at startup. Both endpoints return small immutable JSON
//! payloads, so handlers are infallible and every response is a pure function
//! of the request method and path.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod root;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_span_layer;

/// Fallback for paths with no registered route.
///
/// Unmatched paths are a normal 404, not an error condition. A known path hit
/// with the wrong method never reaches this fallback; axum answers 405 for it.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not found" })),
    )
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Health check - never cached, liveness probes must see a fresh response
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .route("/", get(root::index))
        .merge(health_routes)
        .fallback(not_found)
        // Request span middleware - outermost layer, correlates logs per request
        .layer(middleware::from_fn(request_span_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn root_returns_message_payload() {
        let (status, content_type, body) = send(create_router(), Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            br#"{"message":"Hello from Spring Boot (Java 11) on Azure Container Apps"}"#
        );
    }

    #[tokio::test]
    async fn root_ignores_query_parameters() {
        let (status, _, body) = send(create_router(), Method::GET, "/?debug=1&x=y").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            br#"{"message":"Hello from Spring Boot (Java 11) on Azure Container Apps"}"#
        );
    }

    #[tokio::test]
    async fn health_returns_ok_status() {
        let (status, content_type, body) = send(create_router(), Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn health_is_never_cached() {
        let response = create_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let (status, content_type, _) = send(create_router(), Method::GET, "/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn wrong_method_on_root_is_not_200() {
        let (status, _, _) = send(create_router(), Method::POST, "/").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn consecutive_requests_return_identical_bodies() {
        let (_, _, first) = send(create_router(), Method::GET, "/").await;
        let (_, _, second) = send(create_router(), Method::GET, "/").await;

        assert_eq!(first, second);
    }
}
