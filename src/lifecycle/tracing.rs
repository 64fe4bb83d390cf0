//! # Observability & Tracing
//!
//! Structured logging for the whole crate is done with `tracing`. The
//! subscriber uses a compact format without module targets.
//!
//! ## Filtering
//!
//! `RUST_LOG` wins when it is set. Otherwise the `[log] level` value from the
//! configuration is used.
//!
//! ```bash
//! # Request logs from the HTTP layer plus store scans
//! RUST_LOG=shopping_list=debug,tower_http=debug cargo run -- serve --memory --seed
//! ```
//!
//! ## What Gets Traced
//!
//! - **Service**: one span per request from `TraceLayer`, plus the handler span
//!   with the number of items served
//! - **Store**: scans and inserts at `debug`, connection failures at `warn`
//! - **Gateway**: the URL requested, failures and the number of items received
//! - **Lifecycle**: startup, seeding, shutdown

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, before any events are emitted.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
