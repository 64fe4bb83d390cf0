//! Error types for the client data gateway.

use thiserror::Error;

/// Errors that can occur while fetching the shopping list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The request never got an HTTP answer (refused, DNS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service responded with status {0}")]
    Status(u16),

    /// The body was not a JSON array of `{ "title": string }` objects.
    #[error("could not decode shopping list: {0}")]
    Decode(String),
}
