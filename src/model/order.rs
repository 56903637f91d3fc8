//! Order aggregate: header, line items and the status state machine.
//!
//! An [`Order`] is only ever built by the order actor while placing it. Callers get
//! clones through [`OrderClient`](crate::clients::OrderClient) and can read but not
//! assign the status, the items or the total.

use crate::model::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Type-safe identifier for order line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderItemId(pub u32);

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Lifecycle of an order.
///
/// ```text
/// pending --cancel--> cancelled
///    \-----complete-> completed
/// ```
/// `cancelled` and `completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Cancelled,
    Completed,
}

impl OrderStatus {
    pub fn is_final(self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }

    /// Whether the state machine allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Cancelled) | (OrderStatus::Pending, OrderStatus::Completed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (product, quantity, frozen price) entry of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Product price at the moment the stock was taken.
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A requested (product, quantity) pair, as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    status: OrderStatus,
    items: Vec<OrderItem>,
    total: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    requested: Vec<OrderLine>,
}

impl Order {
    /// A pending order that has not been priced yet. `requested` is consumed by
    /// [`Order::take_requested`] when the order is placed.
    pub(crate) fn pending(id: OrderId, user_id: UserId, requested: Vec<OrderLine>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            status: OrderStatus::Pending,
            items: Vec::new(),
            total: 0.0,
            created_at: now,
            updated_at: now,
            requested,
        }
    }

    pub(crate) fn take_requested(&mut self) -> Vec<OrderLine> {
        std::mem::take(&mut self.requested)
    }

    /// Attaches the priced line items and derives the total from them.
    pub(crate) fn attach_items(&mut self, items: Vec<OrderItem>) {
        self.total = items.iter().map(OrderItem::line_total).sum();
        self.items = items;
    }

    /// Moves the order to `next`. Callers check [`OrderStatus::can_transition_to`] first.
    pub(crate) fn set_status(&mut self, next: OrderStatus) {
        self.status = next;
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of `unit_price * quantity` over every line item.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
