//! Error types for the Order actor.

use crate::framework::FrameworkError;
use crate::inventory_actor::ProductError;
use crate::model::{OrderId, OrderStatus, ProductId, UserId};
use crate::user_actor::UserError;
use thiserror::Error;

/// Coarse classification of an [`OrderError`], for callers that translate errors into
/// responses without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request, rejected before any side effect.
    Validation,
    /// A user, product or order is absent.
    NotFound,
    /// The request clashes with current state; retrying after the state changes may succeed.
    Conflict,
    /// The storage layer failed. Nothing the request staged is visible.
    Fatal,
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    Validation(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order already reached a terminal status.
    #[error("Order {order_id} is already {status}")]
    AlreadyFinalized { order_id: OrderId, status: OrderStatus },

    /// An actor or channel failed underneath the operation.
    #[error("Order storage error: {0}")]
    Storage(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Validation(_) => ErrorKind::Validation,
            OrderError::UserNotFound(_) | OrderError::ProductNotFound(_) | OrderError::NotFound(_) => {
                ErrorKind::NotFound
            }
            OrderError::InsufficientStock { .. } | OrderError::AlreadyFinalized { .. } => {
                ErrorKind::Conflict
            }
            OrderError::Storage(_) => ErrorKind::Fatal,
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Storage(msg)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|other| OrderError::Storage(other.to_string()))
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock {
                product_id,
                requested,
                available,
            } => OrderError::InsufficientStock {
                product_id,
                requested,
                available,
            },
            ProductError::InvalidQuantity(_) | ProductError::ValidationError(_) => {
                OrderError::Validation(e.to_string())
            }
            ProductError::StockOverflow { .. } | ProductError::ActorCommunicationError(_) => {
                OrderError::Storage(e.to_string())
            }
        }
    }
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::UserNotFound(id),
            UserError::ValidationError(msg) => OrderError::Validation(msg),
            UserError::ActorCommunicationError(msg) => OrderError::Storage(msg),
        }
    }
}
