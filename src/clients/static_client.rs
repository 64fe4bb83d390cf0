//! Literal-backed gateway, used as the front end's stand-in data source.

use crate::clients::{GatewayError, ShoppingListGateway};
use crate::model::{demo_items, ShoppingListItem};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Gateway that always resolves with the same list.
///
/// `Default` gives Milk, Eggs and Stick of Butter.
#[derive(Debug, Clone)]
pub struct StaticShoppingListClient {
    items: Vec<ShoppingListItem>,
}

impl StaticShoppingListClient {
    pub fn new(items: Vec<ShoppingListItem>) -> Self {
        Self { items }
    }
}

impl Default for StaticShoppingListClient {
    fn default() -> Self {
        Self::new(demo_items())
    }
}

#[async_trait]
impl ShoppingListGateway for StaticShoppingListClient {
    #[instrument(skip(self))]
    async fn fetch_shopping_list(&self) -> Result<Vec<ShoppingListItem>, GatewayError> {
        debug!(count = self.items.len(), "Returning static list");
        Ok(self.items.clone())
    }
}
