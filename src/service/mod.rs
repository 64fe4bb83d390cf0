//! # Resource Service
//!
//! The HTTP face of the store. One operation:
//!
//! - `GET /shopping-list` returns every stored item as a JSON array of
//!   `{ "title": string }` objects.
//! - `GET /ShoppingList` is the same handler under the controller-style path
//!   older clients call.
//!
//! The service holds no state of its own between requests. Each request gets
//! the shared [`ItemStore`] handle and the store scopes its own connection.
//!
//! Hosting concerns are layered on when the router is built: HTTP tracing
//! always, and a permissive development CORS policy when
//! [`ServerSection::allow_any_origin`] is set.

mod error;
mod handlers;


use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerSection;
use crate::store::ItemStore;

pub use error::ServiceError;

/// Path of the list-retrieval endpoint.
pub const SHOPPING_LIST_PATH: &str = "/shopping-list";

/// Controller-style alias of [`SHOPPING_LIST_PATH`].
pub const SHOPPING_LIST_ALIAS: &str = "/ShoppingList";

/// State handed to every handler.
#[derive(Clone)]
pub(crate) struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// The shopping list HTTP service.
pub struct ResourceService {
    router: Router,
}

impl ResourceService {
    pub fn new(store: Arc<dyn ItemStore>, server: &ServerSection) -> Self {
        let state = AppState { store };
        Self {
            router: Self::build_router(state, server.allow_any_origin),
        }
    }

    fn build_router(state: AppState, allow_any_origin: bool) -> Router {
        let mut router = Router::new()
            .route(SHOPPING_LIST_PATH, get(handlers::get_shopping_list))
            .route(SHOPPING_LIST_ALIAS, get(handlers::get_shopping_list))
            .layer(TraceLayer::new_for_http());

        if allow_any_origin {
            router = router.layer(dev_cors_layer());
        }

        router.with_state(state)
    }

    /// Return the inner [`Router`] (useful for testing with `tower::ServiceExt`).
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve on an already bound listener until `shutdown` completes.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve_with_shutdown(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        info!(%addr, "Shopping list service listening");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// The "Dev" policy: any origin, any method.
fn dev_cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any)
}
