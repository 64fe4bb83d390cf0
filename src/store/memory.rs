//! # In-Memory Store Actor
//!
//! An actor that owns the item collection in process. The [`MemoryStoreActor`]
//! is the "server" half: it holds the map and the receiving end of the channel
//! and processes requests one at a time. The [`MemoryItemStore`] is the
//! "client" half: cheap to clone, it sends a [`StoreRequest`] and waits on a
//! oneshot channel for the answer.
//!
//! Because only the actor task touches the map, no lock is needed.
//!
//! ```rust
//! use shopping_list::model::ShoppingListItem;
//! use shopping_list::store::{ItemStore, MemoryStoreActor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = MemoryStoreActor::new(16);
//!     let handle = tokio::spawn(actor.run());
//!
//!     store.insert_item(ShoppingListItem::new("Milk")).await.unwrap();
//!     assert_eq!(store.list_items().await.unwrap().len(), 1);
//!
//!     // Dropping the last client closes the channel and stops the actor.
//!     drop(store);
//!     handle.await.unwrap();
//! }
//! ```

use crate::model::{ItemId, ShoppingListItem};
use crate::store::{ItemStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// One-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Message sent from a [`MemoryItemStore`] to its actor.
#[derive(Debug)]
pub enum StoreRequest {
    Insert {
        item: ShoppingListItem,
        respond_to: Response<ItemId>,
    },
    List {
        respond_to: Response<Vec<ShoppingListItem>>,
    },
}

/// The actor that owns the in-memory item collection.
///
/// Items are keyed by their [`ItemId`], so a scan returns them in insertion
/// order.
pub struct MemoryStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    items: BTreeMap<ItemId, ShoppingListItem>,
    next_id: i64,
}

impl MemoryStoreActor {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; when it is full, callers wait.
    pub fn new(buffer_size: usize) -> (Self, MemoryItemStore) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: BTreeMap::new(),
            next_id: 1,
        };
        (actor, MemoryItemStore { sender })
    }

    /// Runs the message loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Memory store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { item, respond_to } => {
                    let id = ItemId(self.next_id);
                    self.next_id += 1;
                    debug!(%id, title = %item.title, "Insert");
                    self.items.insert(id, item);
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<_> = self.items.values().cloned().collect();
                    debug!(count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(size = self.items.len(), "Memory store shutdown");
    }
}

/// Client half of the in-memory store.
#[derive(Clone)]
pub struct MemoryItemStore {
    sender: mpsc::Sender<StoreRequest>,
}

impl MemoryItemStore {
    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Unavailable("memory store closed".into()))?;
        response
            .await
            .map_err(|_| StoreError::Unavailable("memory store dropped response".into()))?
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_items(&self) -> Result<Vec<ShoppingListItem>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    async fn insert_item(&self, item: ShoppingListItem) -> Result<ItemId, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { item, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (actor, store) = MemoryStoreActor::new(4);
        let handle = tokio::spawn(actor.run());

        assert!(store.list_items().await.unwrap().is_empty());

        drop(store);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_keeps_order() {
        let (actor, store) = MemoryStoreActor::new(4);
        let handle = tokio::spawn(actor.run());

        let first = store.insert_item(ShoppingListItem::new("Milk")).await.unwrap();
        let second = store.insert_item(ShoppingListItem::new("Milk")).await.unwrap();
        assert_eq!(first, ItemId(1));
        assert_eq!(second, ItemId(2));

        let items = store.list_items().await.unwrap();
        assert_eq!(
            items,
            vec![ShoppingListItem::new("Milk"), ShoppingListItem::new("Milk")]
        );

        drop(store);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn clones_share_the_same_actor() {
        let (actor, store) = MemoryStoreActor::new(4);
        let handle = tokio::spawn(actor.run());
        let other = store.clone();

        other.insert_item(ShoppingListItem::new("Eggs")).await.unwrap();
        assert_eq!(store.list_items().await.unwrap().len(), 1);

        drop(store);
        drop(other);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn stopped_actor_reports_unavailable() {
        let (actor, store) = MemoryStoreActor::new(4);
        drop(actor);

        let result = store.list_items().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
