//! Axum server setup
//!
//! Startup is an explicit ordered sequence, each step short-circuiting:
//! - build the resource router around the injected store
//! - attach the OpenAPI document
//! - attach the documentation UI
//! - wrap in tracing/CORS layers
//!
//! The finished router is then either served on a TCP listener (with
//! graceful shutdown on SIGTERM/Ctrl+C) or handed to the Lambda adapter.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use clap::ValueEnum;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::{docs, lambda, routes};
use crate::db::{self, DatabaseConfig, ItemRepo, ItemStore};

/// How the process receives requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Bind a TCP listener
    #[default]
    Listen,
    /// Never bind; an external runtime forwards requests
    Serverless,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to in listen mode (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    pub mode: RunMode,

    /// Allow permissive CORS (default: false = no cross-origin access)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            mode: RunMode::Listen,
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}

/// Errors that stop the process before or while serving
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to render OpenAPI document: {0}")]
    Docs(#[source] serde_json::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("serverless mode requires the `lambda` feature")]
    ServerlessUnavailable,

    #[error("serverless adapter failed: {0}")]
    Adapter(String),
}

/// Build the resource routes around `store` (no docs, no layers).
pub fn build_router(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .merge(routes::health::router::<Arc<AppState>>())
        .merge(routes::items::router())
        .with_state(Arc::new(AppState::new(store)))
}

/// Build the complete application: routes, docs, UI and middleware.
pub fn build_app(store: Arc<dyn ItemStore>, config: &ServerConfig) -> Result<Router, StartupError> {
    let app = build_router(store);

    let doc = docs::ApiDoc::openapi();
    let app = docs::attach_document(app, &doc)?;
    let app = docs::attach_ui(app, doc);

    let app = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    // ApiError logs 5xx responses itself
    Ok(app.layer(TraceLayer::new_for_http().on_failure(())))
}

/// Connect the database and run until shutdown.
pub async fn start(database: &DatabaseConfig, config: ServerConfig) -> Result<(), StartupError> {
    let pool = db::connect(database)
        .await
        .map_err(StartupError::Database)?;
    tracing::info!("Database pool ready");

    run_server(Arc::new(ItemRepo::new(pool)), config).await
}

/// Run the HTTP server with an already constructed store.
///
/// # Example
///
/// ```ignore
/// let pool = db::connect(&DatabaseConfig::new(database_url)).await?;
/// run_server(Arc::new(ItemRepo::new(pool)), ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn ItemStore>, config: ServerConfig) -> Result<(), StartupError> {
    let app = build_app(store, &config)?;

    match config.mode {
        RunMode::Listen => serve_listener(app, config.bind_addr).await,
        RunMode::Serverless => {
            tracing::info!("Serverless mode: handing router to the adapter");
            lambda::run(app).await
        }
    }
}

async fn serve_listener(app: Router, addr: SocketAddr) -> Result<(), StartupError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;
    use crate::db::MemoryItemStore;

    /// Counts ERROR events seen by the test-local subscriber
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.mode, RunMode::Listen);
        assert!(!config.cors_permissive);
    }

    #[test]
    fn app_builds_with_memory_store() {
        let app = build_app(Arc::new(MemoryItemStore::new()), &ServerConfig::default());
        assert!(app.is_ok());
    }

    #[tokio::test]
    async fn storage_failure_logs_one_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let store = Arc::new(MemoryItemStore::new());
        store.fail_with("connection refused").await;
        let app = build_app(store, &ServerConfig::default()).unwrap();

        let request = Request::builder().uri("/items").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unreachable_database_is_fatal() {
        let database = DatabaseConfig::new("not a url");
        let err = start(&database, ServerConfig::default()).await.unwrap_err();
        assert!(matches!(err, StartupError::Database(_)));
    }

    #[cfg(not(feature = "lambda"))]
    #[tokio::test]
    async fn serverless_without_adapter_fails() {
        let config = ServerConfig {
            mode: RunMode::Serverless,
            ..ServerConfig::default()
        };
        let err = run_server(Arc::new(MemoryItemStore::new()), config)
            .await
            .unwrap_err();
        assert!(matches!(err, StartupError::ServerlessUnavailable));
    }
}
