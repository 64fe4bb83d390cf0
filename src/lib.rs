//! # Shopping List
//!
//! > **A single-resource retrieval service and the gateway that reads it.**
//!
//! One entity, [`ShoppingListItem`](model::ShoppingListItem), lives in a store.
//! The resource service exposes it as `GET /shopping-list`; the client data
//! gateway gives a UI layer the same list, either from a literal or from the
//! service over HTTP.
//!
//! ```text
//! UI ──► ShoppingListGateway ──HTTP──► ResourceService ──► ItemStore
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: the plain value type shared by every layer.
//! - **Key items**: [`ShoppingListItem`](model::ShoppingListItem), [`ItemId`](model::ItemId).
//!
//! ### 2. The Store ([`store`])
//! - **Role**: owns the authoritative collection behind the [`ItemStore`](store::ItemStore) trait.
//! - **Key items**: [`SqliteItemStore`](store::SqliteItemStore),
//!   [`MemoryStoreActor`](store::MemoryStoreActor), [`MockItemStore`](store::MockItemStore).
//!
//! ### 3. The Service ([`service`])
//! - **Role**: turns a store scan into a JSON response. Stateless per request.
//! - **Key items**: [`ResourceService`](service::ResourceService), [`ServiceError`](service::ServiceError).
//!
//! ### 4. The Gateway ([`clients`])
//! - **Role**: the consumer side. One trait, a static and an HTTP implementation.
//! - **Key items**: [`ShoppingListGateway`](clients::ShoppingListGateway),
//!   [`HttpShoppingListClient`](clients::HttpShoppingListClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: reads configuration once at start, wires store and service,
//!   shuts both down cleanly.
//! - **Key items**: [`ShoppingListSystem`](lifecycle::ShoppingListSystem), [`AppConfig`](config::AppConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # In-memory store seeded with Milk, Eggs and Stick of Butter
//! RUST_LOG=info cargo run -- serve --memory --seed
//!
//! # In another terminal
//! cargo run -- fetch
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
