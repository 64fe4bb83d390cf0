//! Gateway failure modes against real HTTP servers on ephemeral ports.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use shopping_list::clients::{GatewayError, HttpShoppingListClient, ShoppingListGateway};
use shopping_list::config::ServerSection;
use shopping_list::service::ResourceService;
use shopping_list::store::{MockItemStore, SqliteItemStore, SqliteStoreConfig, StoreError};
use tokio::net::TcpListener;

/// Serve `router` on a free local port and return its base URL.
async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn closed_database_surfaces_as_503() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("shopping.db").display());
    let store = SqliteItemStore::connect_lazy(&SqliteStoreConfig::new(url)).unwrap();
    store.ensure_schema().await.unwrap();
    store.close().await;

    let router = ResourceService::new(Arc::new(store), &ServerSection::default()).into_router();
    let gateway = HttpShoppingListClient::new(&spawn_router(router).await).unwrap();

    let result = gateway.fetch_shopping_list().await;
    assert_eq!(result, Err(GatewayError::Status(503)));
}

#[tokio::test]
async fn failed_query_surfaces_as_500() {
    let mut mock = MockItemStore::new();
    mock.expect_list()
        .return_err(StoreError::Query("disk I/O error".into()));
    let router =
        ResourceService::new(Arc::new(mock.clone()), &ServerSection::default()).into_router();
    let gateway = HttpShoppingListClient::new(&spawn_router(router).await).unwrap();

    let result = gateway.fetch_shopping_list().await;
    assert_eq!(result, Err(GatewayError::Status(500)));
    mock.verify();
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let router = Router::new().route(
        "/shopping-list",
        get(|| async { Json(serde_json::json!({ "items": [] })) }),
    );
    let gateway = HttpShoppingListClient::new(&spawn_router(router).await).unwrap();

    let result = gateway.fetch_shopping_list().await;
    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[tokio::test]
async fn wrong_path_is_a_404_status() {
    let router = Router::new().route("/other", get(|| async { "nothing here" }));
    let gateway = HttpShoppingListClient::new(&spawn_router(router).await).unwrap();

    let result = gateway.fetch_shopping_list().await;
    assert_eq!(result, Err(GatewayError::Status(404)));
}
