//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the records of one entity type
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests to an actor
//! - [`Unit`] - Batch of actions that an actor commits all-or-nothing
//! - [`FrameworkError`] / [`UnitError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod unit;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, UnitError};
pub use message::{ResourceRequest, Response, UnitOutcome};
pub use unit::Unit;
