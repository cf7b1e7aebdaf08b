//! HTTP server layer
//!
//! Axum server with:
//! - Item CRUD routes and a health probe
//! - OpenAPI document + interactive docs
//! - Request tracing, optional permissive CORS
//! - Graceful shutdown, or a Lambda adapter in serverless mode
//! - JSON error responses

pub mod docs;
pub mod error;
pub mod extractors;
pub mod lambda;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    build_app, build_router, run_server, start, AppState, RunMode, ServerConfig, StartupError,
};
