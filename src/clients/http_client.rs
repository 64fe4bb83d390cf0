//! # HTTP Client
//!
//! Fetches the shopping list from a running resource service with
//! `GET {base_url}/shopping-list`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::clients::{GatewayError, ShoppingListGateway};
use crate::model::ShoppingListItem;
use crate::service::SHOPPING_LIST_PATH;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway backed by the resource service.
#[derive(Debug, Clone)]
pub struct HttpShoppingListClient {
    client: reqwest::Client,
    url: String,
}

impl HttpShoppingListClient {
    /// Client with the default 10 second request timeout.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self::from_client(client, base_url))
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), SHOPPING_LIST_PATH),
        }
    }

    /// The full URL this client requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ShoppingListGateway for HttpShoppingListClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_shopping_list(&self) -> Result<Vec<ShoppingListItem>, GatewayError> {
        debug!("Sending request");
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            warn!(error = %e, "Request failed");
            GatewayError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Service returned an error");
            return Err(GatewayError::Status(status.as_u16()));
        }

        let items: Vec<ShoppingListItem> = response.json().await.map_err(|e| {
            if e.is_decode() {
                GatewayError::Decode(e.to_string())
            } else {
                GatewayError::Transport(e.to_string())
            }
        })?;
        debug!(count = items.len(), "Received shopping list");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = HttpShoppingListClient::new("http://localhost:5080").unwrap();
        assert_eq!(client.url(), "http://localhost:5080/shopping-list");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let client = HttpShoppingListClient::new("http://localhost:5080/").unwrap();
        assert_eq!(client.url(), "http://localhost:5080/shopping-list");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Grab a free port and release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpShoppingListClient::new(&format!("http://{addr}")).unwrap();
        let result = client.fetch_shopping_list().await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }
}
