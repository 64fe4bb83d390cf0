//! Error responses of the resource service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::store::StoreError;

/// Errors returned by service handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Body of every error response. Only ever carries a generic message.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(StoreError::Query(_) | StoreError::Config(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Store(StoreError::Unavailable(_)) => "service unavailable",
            Self::Store(_) => "internal server error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Details go to the log, never to the client.
        warn!(status = status.as_u16(), error = %self, "Request failed");
        (
            status,
            Json(ErrorBody {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
