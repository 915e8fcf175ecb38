//! aca-quickstart - a minimal JSON-over-HTTP service.
//!
//! A quickstart sample for deploying to Azure Container Apps: two fixed JSON
//! endpoints (`/` and `/health`) behind an Axum router, with TOML/env
//! configuration and graceful shutdown.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
