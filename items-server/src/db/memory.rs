//! In-memory `ItemStore` for tests and local experiments.
//!
//! Mirrors the Postgres semantics that handlers rely on: ids come from a
//! counter that never goes backwards (deleted ids are not reused) and
//! `list` is ordered by id. `fail_with` makes every call fail, standing in
//! for a lost database connection.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{ItemStore, StoreError};
use crate::models::{Item, ItemPatch, NewItem};

#[derive(Default)]
pub struct MemoryItemStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    items: BTreeMap<i64, Item>,
    last_id: i64,
    failure: Option<String>,
}

impl Inner {
    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(msg) => Err(StoreError::Unavailable(msg.clone())),
            None => Ok(()),
        }
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every subsequent call with `StoreError::Unavailable(msg)`.
    pub async fn fail_with(&self, msg: impl Into<String>) {
        self.inner.lock().await.failure = Some(msg.into());
    }

    /// Undo `fail_with`.
    pub async fn recover(&self) {
        self.inner.lock().await.failure = None;
    }

    /// Number of stored rows (ignores injected failures).
    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.check()?;

        inner.last_id += 1;
        let item = Item {
            id: inner.last_id,
            name: item.name.into_string(),
            description: item.description,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.lock().await;
        inner.check()?;
        Ok(inner.items.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let inner = self.inner.lock().await;
        inner.check()?;
        Ok(inner.items.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        let mut inner = self.inner.lock().await;
        inner.check()?;

        let Some(item) = inner.items.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            item.name = name.into_string();
        }
        if let Some(description) = patch.description {
            item.description = Some(description);
        }
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.check()?;
        Ok(inner.items.remove(&id).is_some())
    }
}
