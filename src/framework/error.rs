//! # Framework Errors
//!
//! Common error types used throughout the actor framework, shared by every actor and client.

use std::fmt::{Debug, Display};

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No ids left to allocate")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Anything that is not an entity error of type `E` is handed back unchanged.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(source) => source
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }

    /// True when the failure happened in the channel plumbing rather than in an entity.
    pub fn is_transport(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }
}

/// Why a [`Unit`](crate::framework::Unit) was not committed.
///
/// `step` is the zero-based index of the staged action that stopped the unit. Nothing the
/// unit staged is visible after any of these errors.
#[derive(Debug, thiserror::Error)]
pub enum UnitError<Id, E>
where
    Id: Display + Debug,
    E: std::error::Error + 'static,
{
    #[error("Unit step {step}: no record {id}")]
    NotFound { step: usize, id: Id },
    #[error("Unit step {step} rejected by {id}: {source}")]
    Rejected {
        step: usize,
        id: Id,
        #[source]
        source: E,
    },
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
