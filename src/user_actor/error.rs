//! Error types for the User actor.

use crate::framework::FrameworkError;
use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        e.downcast_entity::<UserError>()
            .unwrap_or_else(|other| UserError::ActorCommunicationError(other.to_string()))
    }
}
