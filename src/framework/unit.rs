//! # Unit of Work
//!
//! A [`Unit`] collects actions destined for one actor and ships them as a single
//! `Commit` request. The actor applies them to staged copies and publishes the result
//! only if every step succeeds, so no reader ever observes half of a unit.
//!
//! ```rust,ignore
//! let mut unit = inventory.begin_unit();
//! unit.stage(p1, ProductAction::TryDecrement(2))
//!     .stage(p2, ProductAction::TryDecrement(1));
//! let results = unit.commit().await?; // both applied, or neither
//! ```
//!
//! Nothing is sent before `commit`. A unit that is discarded, or simply dropped on an
//! early `?` return, leaves the actor untouched.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::UnitOutcome;
use tracing::debug;

/// A set of staged actions that commits or discards as a whole.
pub struct Unit<T: ActorEntity> {
    client: ResourceClient<T>,
    steps: Vec<(T::Id, T::Action)>,
}

impl<T: ActorEntity> Unit<T> {
    pub(crate) fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            steps: Vec::new(),
        }
    }

    /// Appends an action to the unit. Steps run in the order they were staged.
    pub fn stage(&mut self, id: T::Id, action: T::Action) -> &mut Self {
        self.steps.push((id, action));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sends every staged step to the actor as one request.
    ///
    /// On success the results are returned in staging order. An empty unit commits
    /// trivially without contacting the actor.
    pub async fn commit(mut self) -> UnitOutcome<T> {
        let steps = std::mem::take(&mut self.steps);
        if steps.is_empty() {
            return Ok(Vec::new());
        }
        self.client.commit(steps).await
    }

    /// Drops every staged step without contacting the actor.
    pub fn discard(mut self) {
        debug!(steps = self.steps.len(), "Unit discarded");
        self.steps.clear();
    }
}

impl<T: ActorEntity> Drop for Unit<T> {
    fn drop(&mut self) {
        if !self.steps.is_empty() {
            debug!(steps = self.steps.len(), "Uncommitted unit dropped");
        }
    }
}
