//! # Shopping List Item
//!
//! The single entity of the system. A [`ShoppingListItem`] is a plain value:
//! it carries its title and nothing else. The row identifier assigned by the
//! store lives in [`ItemId`] and never travels over the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry on the shopping list.
///
/// Serializes as `{ "title": "..." }`. Titles are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub title: String,
}

impl ShoppingListItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Identifier assigned by a store when an item is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// The three items the tutorial front end has always shown.
pub fn demo_items() -> Vec<ShoppingListItem> {
    vec![
        ShoppingListItem::new("Milk"),
        ShoppingListItem::new("Eggs"),
        ShoppingListItem::new("Stick of Butter"),
    ]
}
