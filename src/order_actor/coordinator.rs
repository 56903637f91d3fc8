//! Order placement.
//!
//! Validation happens in [`validate_lines`] before the order record is even built.
//! [`place`] then runs from the order's create hook:
//!
//! 1. the user must exist,
//! 2. one `TryDecrement` per line is staged in a single ledger unit and committed,
//! 3. line items are built from the price snapshots the ledger returned,
//! 4. the total is derived from the items.
//!
//! An error at any step returns before the actor inserts the order. The ledger unit is
//! the only side effect, and it either commits entirely or not at all.

use super::{ErrorKind, OrderContext, OrderError};
use crate::clients::ActorClient;
use crate::model::{Order, OrderItem, OrderLine};
use tracing::{debug, error, info};

/// Rejects requests that could never be placed.
pub fn validate_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::Validation("order must contain at least one item".into()));
    }
    if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::Validation(format!(
            "quantity for {} must be positive",
            line.product_id
        )));
    }
    Ok(())
}

/// Reserves stock for a freshly built pending order and prices its items.
pub(crate) async fn place(order: &mut Order, ctx: &OrderContext) -> Result<(), OrderError> {
    let lines = order.take_requested();
    debug!(order_id = %order.id(), user_id = %order.user_id(), lines = lines.len(), "Placing order");

    ctx.users
        .get(order.user_id())
        .await?
        .ok_or(OrderError::UserNotFound(order.user_id()))?;

    let reservations = ctx.inventory.reserve_all(&lines).await.map_err(|e| {
        let e = OrderError::from(e);
        if e.kind() == ErrorKind::Fatal {
            error!(order_id = %order.id(), error = %e, "Stock reservation failed");
        }
        e
    })?;

    let items: Vec<OrderItem> = reservations
        .into_iter()
        .map(|reservation| OrderItem {
            id: ctx.next_item_id(),
            order_id: order.id(),
            product_id: reservation.product_id,
            quantity: reservation.quantity,
            unit_price: reservation.unit_price,
        })
        .collect();
    order.attach_items(items);

    info!(order_id = %order.id(), total = order.total(), "Order placed");
    Ok(())
}
