//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Placement and cancellation run inside the actor (see [`crate::order_actor`]); this
//! client only translates requests and errors.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Page, PageRequest};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

/// Page size used by [`OrderClient::list_orders`] when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    default_page_size: usize,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self {
            inner,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    fn map_for(id: OrderId) -> impl FnOnce(FrameworkError) -> OrderError {
        move |e| match e {
            FrameworkError::NotFound(_) => OrderError::NotFound(id),
            other => {
                if other.is_transport() {
                    error!(order_id = %id, error = %other, "Order actor unavailable");
                }
                OrderError::from(other)
            }
        }
    }

    /// Places an order and returns it with its items, prices and total.
    ///
    /// The returned order is the record as the actor inserted it, so it is always
    /// `pending` even if a cancellation is queued right behind the creation. On any error
    /// no order exists and no stock has moved.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, lines = params.lines.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");

        let (_, order) = self
            .inner
            .create_returning(params)
            .await
            .map_err(OrderError::from)?;
        Ok(order)
    }

    /// Fetches one order. A missing order is [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Lists orders by ascending id.
    ///
    /// `page` is 1-based and values below 1 read as 1. `page_size` defaults to the
    /// client's default page size and is clamped to `[1, MAX_PAGE_SIZE]`.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<Page<Order>, OrderError> {
        let request = PageRequest::new(page, page_size.unwrap_or(self.default_page_size));
        let (items, total) = self
            .inner
            .list(request.offset(), request.page_size())
            .await
            .map_err(OrderError::from)?;
        debug!(returned = items.len(), total, "Listed orders");
        Ok(Page {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
        })
    }

    /// Cancels a pending order and returns its stock.
    ///
    /// Fails with [`OrderError::AlreadyFinalized`] once the order is cancelled or
    /// completed; in that case no stock moves.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        info!("Sending cancel to actor");
        self.inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(Self::map_for(id))
    }

    /// Marks a pending order completed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.inner
            .perform_action(id, OrderAction::Complete)
            .await
            .map_err(Self::map_for(id))
    }
}
