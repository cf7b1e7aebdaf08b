//! Postgres pool for the items table
//!
//! The pool connects eagerly, so an unreachable database fails startup
//! instead of the first request. Its width is a `NonZeroU32`: sqlx panics
//! on a zero-capacity pool, so zero is refused where the value is parsed.

use std::num::NonZeroU32;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool width used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    pub max_connections: NonZeroU32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Open the pool described by `config`.
///
/// # Errors
///
/// Returns the sqlx error if the URL is invalid or no connection can be
/// established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let max_connections = config.max_connections.get();
    tracing::debug!(max_connections, "connecting items database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&config.url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_width() {
        let config = DatabaseConfig::new("postgres://db/items");
        assert_eq!(config.max_connections.get(), 5);
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let config = DatabaseConfig {
            max_connections: NonZeroU32::MIN,
            ..DatabaseConfig::new("postgres://invalid host/items")
        };
        assert!(connect(&config).await.is_err());
    }

    // Needs a real database:
    // DATABASE_URL=postgres://... cargo test -p items-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn items_schema_matches_row_type() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DatabaseConfig {
            max_connections: NonZeroU32::new(2).unwrap(),
            ..DatabaseConfig::new(url)
        };
        let pool = connect(&config).await.expect("pool creation failed");
        assert_eq!(pool.options().get_max_connections(), 2);

        sqlx::query(include_str!("../../sql/items.sql"))
            .execute(&pool)
            .await
            .expect("schema setup failed");

        let columns: Vec<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT column_name::text, data_type::text, is_nullable::text
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = 'items'
            ORDER BY ordinal_position
            "#,
        )
        .fetch_all(&pool)
        .await
        .expect("column query failed");

        let columns: Vec<(&str, &str, &str)> = columns
            .iter()
            .map(|(name, ty, nullable)| (name.as_str(), ty.as_str(), nullable.as_str()))
            .collect();
        assert_eq!(
            columns,
            [
                ("id", "bigint", "NO"),
                ("name", "text", "NO"),
                ("description", "text", "YES"),
            ]
        );
    }
}
