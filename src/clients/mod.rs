//! # Client Data Gateway
//!
//! What a UI layer calls to get the shopping list. The capability is the
//! [`ShoppingListGateway`] trait; which implementation sits behind it is
//! decided by whoever constructs it:
//!
//! - [`StaticShoppingListClient`] answers from a literal list and cannot fail.
//! - [`HttpShoppingListClient`] asks the resource service over HTTP.
//!
//! Neither keeps state between calls; every fetch goes back to its source.

pub mod error;
pub mod gateway;
pub mod http_client;
pub mod static_client;

pub use error::GatewayError;
pub use gateway::ShoppingListGateway;
pub use http_client::HttpShoppingListClient;
pub use static_client::StaticShoppingListClient;
