//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. The actor loop
//! tags every event with `entity_type` and the record id, so the module path is left out
//! (`with_target(false)`).
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, commits, rejections
//! RUST_LOG=debug cargo run    # plus full request payloads and unit steps
//! ```
//!
//! A placement at `info` reads roughly:
//!
//! ```text
//! INFO create_order{user_id=user_1 lines=2}: Sending create_order to actor
//! INFO entity_type="Product" steps=2 Unit committed
//! INFO order_id=order_1 total=25.0 Order placed
//! INFO entity_type="Order" id=order_1 size=1 Created
//! ```
//!
//! A rejected placement logs `Unit aborted` with the failing step instead, and no
//! `Created` line follows.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (usually
/// [`SystemConfig::log_level`](crate::lifecycle::SystemConfig)) is used. Calling this
/// twice is harmless: the second call leaves the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
