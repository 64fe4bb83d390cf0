//! # Mock Store
//!
//! A scripted [`ItemStore`] for testing code that sits on top of a store
//! (the HTTP handlers, seeding) without a database.
//!
//! Queue expectations in the order the code under test will make calls, then
//! call [`MockItemStore::verify`] to check that every one was consumed.
//!
//! ```rust
//! use shopping_list::model::ShoppingListItem;
//! use shopping_list::store::{ItemStore, MockItemStore, StoreError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockItemStore::new();
//!     mock.expect_list().return_ok(vec![ShoppingListItem::new("Milk")]);
//!     mock.expect_list().return_err(StoreError::Unavailable("down".into()));
//!
//!     assert_eq!(mock.list_items().await.unwrap().len(), 1);
//!     assert!(mock.list_items().await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! A call with no matching expectation panics, which fails the test.

use crate::model::{ItemId, ShoppingListItem};
use crate::store::{ItemStore, StoreError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An expected call and the response to give it.
enum Expectation {
    List {
        response: Result<Vec<ShoppingListItem>, StoreError>,
    },
    Insert {
        response: Result<ItemId, StoreError>,
    },
}

impl Expectation {
    fn name(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list_items",
            Expectation::Insert { .. } => "insert_item",
        }
    }
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock store with expectation tracking.
///
/// Clones share the same expectation queue, so a clone can be handed to the
/// code under test while the original is kept for [`verify`](Self::verify).
#[derive(Clone, Default)]
pub struct MockItemStore {
    expectations: Queue,
}

impl MockItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_items` call.
    pub fn expect_list(&mut self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `insert_item` call.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<_> = exps.iter().map(Expectation::name).collect();
            panic!("Unmet expectations: {:?}", pending);
        }
    }

    fn next(&self, called: &str) -> Expectation {
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected call to {called}: no expectations left"))
    }
}

#[async_trait]
impl ItemStore for MockItemStore {
    async fn list_items(&self) -> Result<Vec<ShoppingListItem>, StoreError> {
        match self.next("list_items") {
            Expectation::List { response } => response,
            other => panic!("Expected {} but list_items was called", other.name()),
        }
    }

    async fn insert_item(&self, _item: ShoppingListItem) -> Result<ItemId, StoreError> {
        match self.next("insert_item") {
            Expectation::Insert { response } => response,
            other => panic!("Expected {} but insert_item was called", other.name()),
        }
    }
}

/// Builder for `list_items` expectations.
pub struct ListExpectationBuilder {
    expectations: Queue,
}

impl ListExpectationBuilder {
    pub fn return_ok(self, items: Vec<ShoppingListItem>) {
        self.push(Ok(items));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<ShoppingListItem>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response });
    }
}

/// Builder for `insert_item` expectations.
pub struct InsertExpectationBuilder {
    expectations: Queue,
}

impl InsertExpectationBuilder {
    pub fn return_ok(self, id: ItemId) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ItemId, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert { response });
    }
}
