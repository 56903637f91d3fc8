//! # ActorEntity Trait
//!
//! The contract between a record type and the generic
//! [`ResourceActor`](crate::framework::ResourceActor): associated types for ids, payloads,
//! actions and errors, plus the hooks the actor calls while serving requests.
//!
//! `on_create` and `on_delete` have no-op defaults; `on_update` and `handle_action`
//! must be written by every entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook at `run()` time, which lets an entity depend on clients that
/// were created after its own actor ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so the
    /// actor can page through its records deterministically.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Creation payload.
    type Create: Send + Sync + Debug;

    /// Update payload. Entities that cannot be edited use `()` and reject it.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `TryDecrement`).
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    /// Clients of other actors, handed to every hook. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per actor rather than per action: `ProductError` is the union of
    /// everything any product action can report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is constructed and before it is stored.
    /// An error here means the entity is never inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to the stored record. Validate before assigning: the record is
    /// not staged.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal; an error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The actor runs this against a staged copy of the record; mutations made before an
    /// `Err` is returned are thrown away.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
