//! # SQLite Store
//!
//! The durable backend, built on a `sqlx` connection pool.
//!
//! Each call checks one connection out of the pool, runs a single statement on
//! it and returns the connection when the guard drops, whether the statement
//! succeeded or not. A failed checkout is reported as
//! [`StoreError::Unavailable`]; a failed statement as [`StoreError::Query`].
//!
//! Rows are decoded into a private [`ItemRow`] and converted into
//! [`ShoppingListItem`] values, so the mapping stays out of the HTTP layer.

use crate::model::{ItemId, ShoppingListItem};
use crate::store::{ItemStore, StoreError};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS shopping_list_items (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT    NOT NULL
)
"#;

/// Settings for [`SqliteItemStore::connect_lazy`].
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Connection string, e.g. `sqlite://shopping.db`.
    pub database_url: String,
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before giving up.
    pub acquire_timeout: Duration,
}

impl SqliteStoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// A row of `shopping_list_items` as the database returns it.
#[derive(sqlx::FromRow)]
struct ItemRow {
    title: String,
}

impl From<ItemRow> for ShoppingListItem {
    fn from(row: ItemRow) -> Self {
        ShoppingListItem::new(row.title)
    }
}

/// [`ItemStore`] backed by a SQLite database.
#[derive(Clone, Debug)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Builds the pool without opening a connection.
    ///
    /// The database file is created on first use if it does not exist.
    /// Connection problems surface on the first call, not here.
    pub fn connect_lazy(config: &SqliteStoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::Config(e.to_string()))?
            .create_if_missing(true);
        Ok(Self::with_options(options, config))
    }

    /// Same as [`connect_lazy`](Self::connect_lazy) but with prepared connect options.
    pub fn with_options(options: SqliteConnectOptions, config: &SqliteStoreConfig) -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);
        Self { pool }
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the item table if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        sqlx::query(CREATE_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        info!("Schema ready");
        Ok(())
    }

    /// Closes the pool. Later calls fail with [`StoreError::Unavailable`].
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        self.pool.acquire().await.map_err(|e| {
            warn!(error = %e, "Could not acquire store connection");
            StoreError::Unavailable(e.to_string())
        })
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    #[instrument(skip(self))]
    async fn list_items(&self) -> Result<Vec<ShoppingListItem>, StoreError> {
        let mut conn = self.acquire().await?;
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT title FROM shopping_list_items ORDER BY id")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Item scan failed");
                    StoreError::Query(e.to_string())
                })?;
        debug!(count = rows.len(), "Scanned items");
        Ok(rows.into_iter().map(ShoppingListItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert_item(&self, item: ShoppingListItem) -> Result<ItemId, StoreError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("INSERT INTO shopping_list_items (title) VALUES (?)")
            .bind(&item.title)
            .execute(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let id = ItemId(result.last_insert_rowid());
        debug!(%id, "Inserted item");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_items;
    use tempfile::TempDir;

    async fn temp_store() -> (TempDir, SqliteItemStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("shopping.db").display());
        let store = SqliteItemStore::connect_lazy(&SqliteStoreConfig::new(url)).unwrap();
        store.ensure_schema().await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (_dir, store) = temp_store().await;
        assert!(store.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_exactly_the_inserted_rows() {
        let (_dir, store) = temp_store().await;
        for item in demo_items() {
            store.insert_item(item).await.unwrap();
        }

        let mut listed = store.list_items().await.unwrap();
        let mut expected = demo_items();
        listed.sort();
        expected.sort();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn repeated_scans_are_identical() {
        let (_dir, store) = temp_store().await;
        store.insert_item(ShoppingListItem::new("Milk")).await.unwrap();
        store.insert_item(ShoppingListItem::new("Milk")).await.unwrap();

        let first = store.list_items().await.unwrap();
        let second = store.list_items().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let (_dir, store) = temp_store().await;
        store.insert_item(ShoppingListItem::new("Eggs")).await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.list_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn closed_pool_is_unavailable() {
        let (_dir, store) = temp_store().await;
        store.close().await;

        let result = store.list_items().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("missing").join("shopping.db"))
            .create_if_missing(false);
        let mut config = SqliteStoreConfig::new("unused");
        config.acquire_timeout = Duration::from_secs(1);
        let store = SqliteItemStore::with_options(options, &config);

        let result = store.list_items().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn missing_table_is_a_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("bare.db").display());
        let store = SqliteItemStore::connect_lazy(&SqliteStoreConfig::new(url)).unwrap();

        let result = store.list_items().await;
        assert!(matches!(result, Err(StoreError::Query(_))));
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let result =
            SqliteItemStore::connect_lazy(&SqliteStoreConfig::new("sqlite://shopping.db?mode=bogus"));
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
