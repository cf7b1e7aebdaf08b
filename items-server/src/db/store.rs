//! Storage seam between HTTP handlers and persistence

use async_trait::async_trait;

use crate::models::{Item, ItemPatch, NewItem};

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("update requires at least one field")]
    EmptyPatch,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// CRUD access to the items table.
///
/// Absence is reported through `Option`/`bool`, not as an error, so the
/// handler decides what "not found" means for its route.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a row and return it with its assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    /// All rows, ascending by id.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Apply the fields present in `patch` in a single statement.
    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, StoreError>;

    /// Returns true if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
