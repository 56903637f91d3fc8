//! Ledger actions for the Product actor.
//!
//! Stock is changed only through these actions. Each one runs inside the product
//! actor's message loop, so actions against the same product are totally ordered.

use crate::model::ProductId;

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes `n` units if at least `n` are available; otherwise changes nothing.
    ///
    /// # Errors
    /// [`ProductError::InsufficientStock`](crate::inventory_actor::ProductError::InsufficientStock)
    /// when the request exceeds the available stock.
    TryDecrement(u32),
    /// Returns `n` previously taken units to stock.
    Increment(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    Decremented(Reservation),
    /// Stock level after the increment.
    Incremented(u32),
}

/// Proof of a successful decrement, carrying the price observed at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservation {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: f64,
    pub remaining: u32,
}
