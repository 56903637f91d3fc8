use crate::clients::{InventoryClient, OrderClient, UserClient};
use crate::lifecycle::SystemConfig;
use crate::order_actor::OrderContext;
use tracing::{error, info};

/// Starts, wires and stops the three actors.
///
/// - **User actor**: users, no dependencies
/// - **Product actor**: catalogue and stock ledger, no dependencies
/// - **Order actor**: orders; its context holds clones of the user and inventory clients
///
/// ```ignore
/// let system = OrderSystem::new();
/// let user = system.user_client.create_user(params).await?;
/// let order = system.order_client.create_order(order_params).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub user_client: UserClient,
    pub inventory_client: InventoryClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`]. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = crate::user_actor::new(config.buffer_size);
        let (product_actor, inventory_client) = crate::inventory_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(
            order_actor.run(OrderContext::new(user_client.clone(), inventory_client.clone())),
        );

        info!(buffer_size = config.buffer_size, "Order system started");
        Self {
            user_client,
            inventory_client,
            order_client: order_client.with_default_page_size(config.default_page_size),
            handles: vec![order_handle, user_handle, product_handle],
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes.
    ///
    /// The order actor goes first: its context holds the other two clients, so the user
    /// and product actors only see their channels close once it has stopped. Clones of
    /// the clients held elsewhere keep their actors alive and this call waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
