//! items-server: REST API over a single `items` table
//!
//! Five CRUD operations translated one-to-one into parameterized SQL,
//! an OpenAPI document with a browsable UI, and an optional adapter for
//! running under AWS Lambda instead of a TCP listener.
//!
//! Handlers never reach for a global pool: the storage handle is an
//! `Arc<dyn ItemStore>` passed to [`http::build_router`], which is how the
//! tests run the full router against [`db::MemoryItemStore`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use db::{DatabaseConfig, ItemRepo, ItemStore, MemoryItemStore, StoreError};
pub use http::{build_app, build_router, run_server, start, ServerConfig, StartupError};
pub use models::Item;
