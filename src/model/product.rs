//! Products and their stock.
//!
//! Stock is owned by the inventory actor and only moves through its ledger actions
//! ([`ProductAction`](crate::inventory_actor::ProductAction)); neither
//! [`ProductCreate`] after creation nor [`ProductUpdate`] can assign it.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub(crate) stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `name` - Product name
    /// * `price` - Current unit price
    /// * `stock` - Units available for ordering
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

/// Payload for registering a product with its opening stock.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Catalogue edits. Price changes never reach orders that were already placed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
}
