//! # User Actor
//!
//! The simplest actor in the system: CRUD only, no dependencies, no custom actions.
//! The order coordinator uses it to confirm that the ordering user exists.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
