//! # System Lifecycle
//!
//! Creating, wiring and stopping the actors.
//!
//! Actors are created without dependencies and receive them when they start (`run`
//! takes the entity's `Context`). The order actor is the only one with a context: an
//! [`OrderContext`](crate::order_actor::OrderContext) holding the user and inventory
//! clients. The dependency graph is acyclic, so dropping the clients is enough to stop
//! everything.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::tracing::*;
