//! Pure data structures shared by the store, the service and the clients.

pub mod shopping_list_item;

pub use shopping_list_item::*;
