//! # Persistent Store
//!
//! The store owns the authoritative item collection. Everything above it
//! (the HTTP service, the lifecycle wiring) talks to it through the
//! [`ItemStore`] trait and never sees rows or connections.
//!
//! ## Implementations
//!
//! - [`SqliteItemStore`]: the durable backend. Every call checks a connection
//!   out of a pool and hands it back when the call returns.
//! - [`MemoryItemStore`]: an actor owning an in-process map. Handy for local
//!   runs and end-to-end tests.
//! - [`MockItemStore`]: scripted responses for handler tests. See the
//!   [`mock`] module.

pub mod error;
pub mod memory;
pub mod mock;
pub mod sqlite;

pub use error::StoreError;
pub use memory::{MemoryItemStore, MemoryStoreActor, StoreRequest};
pub use mock::MockItemStore;
pub use sqlite::{SqliteItemStore, SqliteStoreConfig};

use crate::model::{ItemId, ShoppingListItem};
use async_trait::async_trait;
use tracing::info;

/// Read access to the item table, plus insertion for seeding.
///
/// Nothing reachable over HTTP calls [`ItemStore::insert_item`].
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Unfiltered scan of every stored item.
    async fn list_items(&self) -> Result<Vec<ShoppingListItem>, StoreError>;

    /// Store a new item and return the identifier the store assigned.
    async fn insert_item(&self, item: ShoppingListItem) -> Result<ItemId, StoreError>;
}

/// Insert `items` only when the store holds nothing yet.
///
/// Returns how many items were inserted.
pub async fn seed_if_empty(
    store: &dyn ItemStore,
    items: Vec<ShoppingListItem>,
) -> Result<usize, StoreError> {
    if !store.list_items().await?.is_empty() {
        info!("Store already populated, skipping seed");
        return Ok(0);
    }

    let count = items.len();
    for item in items {
        store.insert_item(item).await?;
    }
    info!(count, "Seeded store");
    Ok(count)
}
