//! # Generic Messages
//!
//! Message types used for communication between the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, UnitError};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// What the actor reports back for a committed (or refused) unit of work.
pub type UnitOutcome<T> = Result<
    Vec<<T as ActorEntity>::ActionResult>,
    UnitError<<T as ActorEntity>::Id, <T as ActorEntity>::Error>,
>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// The variants map to the standard lifecycle of a persistent resource:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Fetches a window of resources in ascending ID order plus the total count.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on one resource.
/// - **Commit**: Executes a batch of actions, possibly on several resources, all-or-nothing.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<(T::Id, T)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        offset: usize,
        limit: usize,
        respond_to: Response<(Vec<T>, usize)>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Commit {
        steps: Vec<(T::Id, T::Action)>,
        respond_to: oneshot::Sender<UnitOutcome<T>>,
    },
}
