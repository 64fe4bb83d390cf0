//! Request handlers.

use axum::extract::State;
use axum::Json;
use tracing::{info, instrument};

use crate::model::ShoppingListItem;
use crate::service::{AppState, ServiceError};

/// `GET /shopping-list`: every stored item, unfiltered.
///
/// An empty store is a `200` with `[]`, not an error.
#[instrument(skip_all)]
pub(crate) async fn get_shopping_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShoppingListItem>>, ServiceError> {
    let items = state.store.list_items().await?;
    info!(count = items.len(), "Serving shopping list");
    Ok(Json(items))
}
