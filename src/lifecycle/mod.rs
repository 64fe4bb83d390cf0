//! Runtime orchestration and lifecycle management.
//!
//! - [`ShoppingListSystem`] builds the store named in the configuration,
//!   seeds it if asked, binds the HTTP service and owns every task it spawns.
//! - [`setup_tracing`] initializes logging once per process.

pub mod shopping_system;
pub mod tracing;

pub use self::shopping_system::*;
pub use self::tracing::*;
