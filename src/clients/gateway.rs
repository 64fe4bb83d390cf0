use crate::clients::GatewayError;
use crate::model::ShoppingListItem;
use async_trait::async_trait;

/// Source of shopping list items for a UI layer.
///
/// Order of the returned items is whatever the source produces; callers
/// must not rely on it.
#[async_trait]
pub trait ShoppingListGateway: Send + Sync {
    async fn fetch_shopping_list(&self) -> Result<Vec<ShoppingListItem>, GatewayError>;
}
