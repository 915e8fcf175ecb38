//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by the container platform and load balancers to verify the
//! service is alive.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to
/// HTTP. There is no backing state to inspect, so it always reports ok.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
