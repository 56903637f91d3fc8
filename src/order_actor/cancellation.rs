//! Status transitions out of `pending`.
//!
//! These run as actions, so they operate on a staged copy of the order. When a
//! transition returns an error the copy is dropped and the stored order keeps its
//! previous status, which is what makes a retried cancellation safe: stock is only
//! returned by the attempt whose status change is actually stored.

use super::{ErrorKind, OrderContext, OrderError};
use crate::model::{Order, OrderStatus, ProductId};
use tracing::{error, info};

fn ensure_transition(order: &Order, next: OrderStatus) -> Result<(), OrderError> {
    if order.status().can_transition_to(next) {
        Ok(())
    } else {
        Err(OrderError::AlreadyFinalized {
            order_id: order.id(),
            status: order.status(),
        })
    }
}

/// Returns every item's quantity to stock, then marks the order cancelled.
pub(crate) async fn cancel(order: &mut Order, ctx: &OrderContext) -> Result<OrderStatus, OrderError> {
    ensure_transition(order, OrderStatus::Cancelled)?;

    let restock: Vec<(ProductId, u32)> = order
        .items()
        .iter()
        .map(|item| (item.product_id, item.quantity))
        .collect();

    if let Err(e) = ctx.inventory.restock_all(&restock).await {
        let e = OrderError::from(e);
        if e.kind() == ErrorKind::Fatal {
            error!(order_id = %order.id(), error = %e, "Restock failed; order stays pending");
        }
        return Err(e);
    }

    order.set_status(OrderStatus::Cancelled);
    info!(order_id = %order.id(), items = restock.len(), "Order cancelled");
    Ok(OrderStatus::Cancelled)
}

pub(crate) fn complete(order: &mut Order) -> Result<OrderStatus, OrderError> {
    ensure_transition(order, OrderStatus::Completed)?;
    order.set_status(OrderStatus::Completed);
    info!(order_id = %order.id(), "Order completed");
    Ok(OrderStatus::Completed)
}
