//! # Inventory Ledger
//!
//! The Product actor owns every product record, and with it every stock counter. Stock
//! moves only through [`ProductAction::TryDecrement`] and [`ProductAction::Increment`],
//! either one at a time or batched in a [`Unit`](crate::framework::Unit) that the actor
//! applies all-or-nothing.
//!
//! ```rust,ignore
//! let (actor, inventory) = inventory_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = inventory.create_product(ProductCreate { name: "Widget".into(), price: 29.99, stock: 100 }).await?;
//! let reservation = inventory.try_decrement(id, 5).await?;
//! assert_eq!(reservation.remaining, 95);
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its inventory client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InventoryClient::new(generic_client))
}
