//! Error types for the persistent store.

use thiserror::Error;

/// Errors that can occur while talking to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection to the store could be obtained.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A connection was obtained but the statement failed.
    #[error("store query failed: {0}")]
    Query(String),

    /// The store could not be configured (bad connection string, etc.).
    #[error("store configuration error: {0}")]
    Config(String),
}
