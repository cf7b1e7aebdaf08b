//! Item repository - Postgres-backed `ItemStore`

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{ItemStore, StoreError};
use crate::db::update::UpdateStatement;
use crate::models::{Item, ItemPatch, NewItem};

/// Item repository
#[derive(Clone)]
pub struct ItemRepo {
    pool: PgPool,
}

impl ItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepo {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let item: Option<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, StoreError> {
        let stmt = UpdateStatement::build(&patch).ok_or(StoreError::EmptyPatch)?;
        let sql = stmt.sql();

        let mut query = sqlx::query_as::<_, Item>(&sql);
        for param in stmt.into_params() {
            query = query.bind(param);
        }

        let item = query.bind(id).fetch_optional(&self.pool).await?;
        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, DatabaseConfig};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p items-server -- --ignored

    async fn repo() -> ItemRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&DatabaseConfig::new(url))
            .await
            .expect("pool creation failed");
        sqlx::query(include_str!("../../../sql/items.sql"))
            .execute(&pool)
            .await
            .expect("schema setup failed");
        ItemRepo::new(pool)
    }

    fn new_item(name: &str, description: Option<&str>) -> NewItem {
        NewItem::new(Some(name.to_owned()), description.map(str::to_owned)).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trip() {
        let repo = repo().await;
        let created = repo.create(new_item("Widget", None)).await.unwrap();
        assert_eq!(created.description, None);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ids_increase_and_list_is_ordered() {
        let repo = repo().await;
        let a = repo.create(new_item("a", None)).await.unwrap();
        let b = repo.create(new_item("b", None)).await.unwrap();
        assert!(b.id > a.id);

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_keeps_name() {
        let repo = repo().await;
        let created = repo.create(new_item("Widget", None)).await.unwrap();

        let patch = ItemPatch::new(None, Some("A widget".into())).unwrap();
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description.as_deref(), Some("A widget"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_reports_affected_row() {
        let repo = repo().await;
        let created = repo.create(new_item("Doomed", None)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get(created.id).await.unwrap().is_none());
    }
}
