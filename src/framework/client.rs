//! # Generic Client
//!
//! The sending half of a `ResourceActor`. Every call is one message plus a oneshot reply.

use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, UnitError};
use crate::framework::message::{ResourceRequest, Response, UnitOutcome};
use crate::framework::unit::Unit;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a `ResourceActor`.
///
/// Cloning copies the channel sender only, so clones can be handed to any number of
/// tasks. A closed mailbox surfaces as [`FrameworkError::ActorClosed`], a reply that
/// never arrives as [`FrameworkError::ActorDropped`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (id, _) = self.create_returning(params).await?;
        Ok(id)
    }

    /// Like [`create`](Self::create), but also returns the record as it was inserted,
    /// before any later request could change it.
    pub async fn create_returning(&self, params: T::Create) -> Result<(T::Id, T), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    /// Returns up to `limit` records starting at `offset` (ascending ID order) and the
    /// total number of records.
    pub async fn list(&self, offset: usize, limit: usize) -> Result<(Vec<T>, usize), FrameworkError> {
        self.call(|respond_to| ResourceRequest::List {
            offset,
            limit,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Opens an empty unit of work against this actor.
    pub fn begin_unit(&self) -> Unit<T> {
        Unit::new(self.clone())
    }

    pub(crate) async fn commit(&self, steps: Vec<(T::Id, T::Action)>) -> UnitOutcome<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Commit { steps, respond_to })
            .await
            .map_err(|_| UnitError::Framework(FrameworkError::ActorClosed))?;
        response
            .await
            .map_err(|_| UnitError::Framework(FrameworkError::ActorDropped))?
    }
}
