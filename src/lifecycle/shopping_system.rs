use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::{AppConfig, StoreBackend};
use crate::model::demo_items;
use crate::service::ResourceService;
use crate::store::{self, ItemStore, MemoryStoreActor, SqliteItemStore, StoreError};

/// Channel capacity of the memory store actor.
const MEMORY_STORE_BUFFER: usize = 64;

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("task failed: {0}")]
    TaskFailed(String),
}

/// The running shopping list backend.
///
/// `ShoppingListSystem` is responsible for:
/// - **Store selection**: SQLite or the in-memory actor, as configured
/// - **Seeding**: the demo items when `seed_demo_items` is set and the store is empty
/// - **Serving**: binding the listener and running [`ResourceService`] in its own task
/// - **Shutdown**: stopping the server, then the store actor, and joining both
///
/// # Example
///
/// ```ignore
/// let system = ShoppingListSystem::start(&config).await?;
/// println!("listening on {}", system.base_url());
///
/// // ... serve traffic ...
///
/// system.shutdown().await?;
/// ```
pub struct ShoppingListSystem {
    /// Handle to the store the service reads from.
    pub store: Arc<dyn ItemStore>,

    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    server_handle: JoinHandle<Result<(), std::io::Error>>,

    /// Present only for the memory backend.
    store_handle: Option<JoinHandle<()>>,
}

impl ShoppingListSystem {
    /// Builds the store, seeds it if configured, binds and starts serving.
    pub async fn start(config: &AppConfig) -> Result<Self, SystemError> {
        // 1. Store
        let (store, store_handle): (Arc<dyn ItemStore>, Option<JoinHandle<()>>) =
            match config.store.backend {
                StoreBackend::Sqlite => {
                    let sqlite = SqliteItemStore::connect_lazy(&config.store.sqlite_config())?;
                    sqlite.ensure_schema().await?;
                    (Arc::new(sqlite) as Arc<dyn ItemStore>, None)
                }
                StoreBackend::Memory => {
                    let (actor, memory) = MemoryStoreActor::new(MEMORY_STORE_BUFFER);
                    let handle = tokio::spawn(actor.run());
                    (Arc::new(memory) as Arc<dyn ItemStore>, Some(handle))
                }
            };
        info!(backend = ?config.store.backend, "Store ready");

        // 2. Seed
        if config.store.seed_demo_items {
            store::seed_if_empty(store.as_ref(), demo_items()).await?;
        }

        // 3. Serve
        let addr = &config.server.listen_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| SystemError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        let service = ResourceService::new(store.clone(), &config.server);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server_handle = tokio::spawn(service.serve_with_shutdown(listener, async move {
            let _ = shutdown_rx.await;
        }));

        Ok(Self {
            store,
            local_addr,
            shutdown_tx,
            server_handle,
            store_handle,
        })
    }

    /// The address the service actually bound (useful with port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://<local_addr>`, ready to hand to an HTTP gateway.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Signals the server to stop accepting connections and waits for
    ///    in-flight requests.
    /// 2. Drops the last store handle, which closes the memory store's channel.
    /// 3. Waits for the store actor to exit.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        let _ = self.shutdown_tx.send(());
        match self.server_handle.await {
            Ok(result) => result?,
            Err(e) => {
                error!("Server task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        drop(self.store);

        if let Some(handle) = self.store_handle {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
