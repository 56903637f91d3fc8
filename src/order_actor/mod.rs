//! # Order Actor
//!
//! Owns every order and runs the two workflows that touch both orders and stock:
//!
//! - **Placement** ([`coordinator`]): runs inside the actor's create hook. The user is
//!   checked, every line is taken from stock in one ledger unit, and the order is
//!   inserted with its priced items and total. Either the whole order exists afterwards
//!   or nothing changed.
//! - **Cancellation** ([`cancellation`]): runs as an action on a staged copy of the
//!   order. Stock goes back in one ledger unit and the status flips only after that
//!   unit commits.
//!
//! Both run inside the order actor's loop, so a caller that gives up on a request
//! cannot stop either workflow half-way, and two cancellations of the same order are
//! strictly ordered.

pub mod actions;
pub mod cancellation;
pub mod coordinator;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{InventoryClient, OrderClient, UserClient};
use crate::framework::ResourceActor;
use crate::model::{Order, OrderItemId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Dependencies injected into the order actor at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub inventory: InventoryClient,
    item_ids: Arc<AtomicU32>,
}

impl OrderContext {
    pub fn new(users: UserClient, inventory: InventoryClient) -> Self {
        Self {
            users,
            inventory,
            item_ids: Arc::new(AtomicU32::new(1)),
        }
    }

    pub(crate) fn next_item_id(&self) -> OrderItemId {
        OrderItemId(self.item_ids.fetch_add(1, Ordering::Relaxed))
    }
}

/// Creates a new Order actor and its client.
///
/// The actor still needs an [`OrderContext`] when it is started with `run`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
