//! Error types for the Product actor.

use crate::framework::{FrameworkError, UnitError};
use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product and stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds the available stock. A normal outcome, not a fault.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Ledger quantities must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Restoring stock would overflow the counter.
    #[error("Stock overflow for {product_id}: {stock} + {increment}")]
    StockOverflow {
        product_id: ProductId,
        stock: u32,
        increment: u32,
    },

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        e.downcast_entity::<ProductError>()
            .unwrap_or_else(|other| ProductError::ActorCommunicationError(other.to_string()))
    }
}

impl From<UnitError<ProductId, ProductError>> for ProductError {
    fn from(e: UnitError<ProductId, ProductError>) -> Self {
        match e {
            UnitError::NotFound { id, .. } => ProductError::NotFound(id),
            UnitError::Rejected { source, .. } => source,
            UnitError::Framework(inner) => ProductError::from(inner),
        }
    }
}
