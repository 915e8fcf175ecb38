//! HTTP server module.
//!
//! Plain-HTTP server startup with graceful shutdown on SIGTERM/SIGINT.
//! TLS termination is left to the container platform's ingress.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
