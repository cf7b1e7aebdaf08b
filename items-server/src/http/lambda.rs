//! Serverless deployment adapter
//!
//! Under AWS Lambda the process never binds a socket. `lambda_http`
//! polls the runtime API and feeds each API Gateway / Function URL event
//! through the same router the listener would serve.

use axum::Router;

use super::server::StartupError;

/// Forward Lambda events into `app` until the runtime shuts down.
#[cfg(feature = "lambda")]
pub async fn run(app: Router) -> Result<(), StartupError> {
    lambda_http::run(app)
        .await
        .map_err(|e| StartupError::Adapter(e.to_string()))
}

/// Built without the `lambda` feature: serverless mode is unavailable.
#[cfg(not(feature = "lambda"))]
pub async fn run(_app: Router) -> Result<(), StartupError> {
    Err(StartupError::ServerlessUnavailable)
}
