use order_ledger::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_ledger::model::{OrderCreate, OrderLine, ProductCreate, UserCreate};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_level);

    info!("Starting order ledger demo");
    let system = OrderSystem::with_config(&config);

    let user_id = async {
        system
            .user_client
            .create_user(UserCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("user_creation"))
    .await?;

    let widget = system
        .inventory_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: 10.0,
            stock: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let gadget = system
        .inventory_client
        .create_product(ProductCreate {
            name: "Gadget".to_string(),
            price: 5.0,
            stock: 3,
        })
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("order_processing");
    let order = async {
        system
            .order_client
            .create_order(OrderCreate {
                user_id,
                lines: vec![OrderLine::new(widget, 2), OrderLine::new(gadget, 1)],
            })
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(order_id = %order.id(), total = order.total(), status = %order.status(), "Order placed");

    // More gadgets than exist: rejected, and the widgets in the same order stay in stock.
    let rejected = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(widget, 1), OrderLine::new(gadget, 1000)],
        })
        .await;
    match rejected {
        Ok(order) => error!(order_id = %order.id(), "Oversized order was accepted"),
        Err(e) => warn!(error = %e, kind = ?e.kind(), "Order rejected"),
    }

    let status = system
        .order_client
        .cancel_order(order.id())
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id(), %status, "Order cancelled");

    for product in [widget, gadget] {
        let stock = system
            .inventory_client
            .check_stock(product)
            .await
            .map_err(|e| e.to_string())?;
        info!(%product, stock, "Stock after cancellation");
    }

    let page = system
        .order_client
        .list_orders(1, None)
        .await
        .map_err(|e| e.to_string())?;
    info!(total = page.total, page = page.page, page_size = page.page_size, "Listed orders");

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
