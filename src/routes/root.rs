//! Handler for the root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Greeting message returned by `GET /`.
pub const GREETING_MESSAGE: &str = "Hello from Spring Boot (Java 11) on Azure Container Apps";

/// Greeting payload.
///
/// A fixed single-field object; serde derives the JSON encoding so no
/// general-purpose serialization machinery is needed.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Root handler.
///
/// Ignores query parameters, headers, and body; always returns the same
/// greeting with status 200.
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
    })
}
