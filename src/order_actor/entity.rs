//! [`ActorEntity`] implementation for [`Order`].

use super::actions::OrderAction;
use super::error::OrderError;
use super::{cancellation, coordinator, OrderContext};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    /// Orders change only through [`OrderAction`]s.
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        coordinator::validate_lines(&params.lines)?;
        Ok(Order::pending(id, params.user_id, params.lines))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        coordinator::place(self, ctx).await
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), Self::Error> {
        Err(OrderError::Validation("orders cannot be edited".into()))
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), Self::Error> {
        Err(OrderError::Validation("orders cannot be deleted".into()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderStatus, Self::Error> {
        match action {
            OrderAction::Cancel => cancellation::cancel(self, ctx).await,
            OrderAction::Complete => cancellation::complete(self),
        }
    }
}
