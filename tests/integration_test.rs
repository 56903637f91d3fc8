use order_ledger::clients::actor_client::ActorClient;
use order_ledger::lifecycle::OrderSystem;
use order_ledger::model::{
    OrderCreate, OrderLine, OrderStatus, ProductCreate, ProductId, ProductUpdate, UserCreate, UserId,
};
use order_ledger::order_actor::{ErrorKind, OrderError};

async fn create_user(system: &OrderSystem, name: &str) -> UserId {
    system
        .user_client
        .create_user(UserCreate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create user")
}

async fn create_product(system: &OrderSystem, name: &str, price: f64, stock: u32) -> ProductId {
    system
        .inventory_client
        .create_product(ProductCreate {
            name: name.to_string(),
            price,
            stock,
        })
        .await
        .expect("Failed to create product")
}

async fn stock(system: &OrderSystem, id: ProductId) -> u32 {
    system
        .inventory_client
        .check_stock(id)
        .await
        .expect("Failed to check stock")
}

/// Full end-to-end flow with all real actors.
#[tokio::test]
async fn test_order_is_priced_and_stock_taken() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Alice").await;
    let p1 = create_product(&system, "Widget", 10.0, 10).await;
    let p2 = create_product(&system, "Gadget", 5.0, 10).await;

    let order = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(p1, 2), OrderLine::new(p2, 1)],
        })
        .await
        .expect("Failed to create order");

    assert_eq!(order.status(), OrderStatus::Pending);
    assert_eq!(order.user_id(), user_id);
    assert_eq!(order.total(), 25.0);
    assert_eq!(order.items().len(), 2);
    assert!(order.items().iter().all(|item| item.order_id == order.id()));
    assert_eq!(
        order
            .items()
            .iter()
            .map(|item| (item.product_id, item.quantity, item.unit_price))
            .collect::<Vec<_>>(),
        vec![(p1, 2, 10.0), (p2, 1, 5.0)]
    );

    assert_eq!(stock(&system, p1).await, 8);
    assert_eq!(stock(&system, p2).await, 9);

    let fetched = system.order_client.get_order(order.id()).await.unwrap();
    assert_eq!(fetched, order);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_insufficient_stock_leaves_no_trace() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Bob").await;
    let product = create_product(&system, "Widget", 10.0, 10).await;

    let result = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 1000)],
        })
        .await;

    let err = result.expect_err("Should fail when stock is insufficient");
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product_id: product,
            requested: 1000,
            available: 10,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(stock(&system, product).await, 10);

    let page = system.order_client.list_orders(1, None).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failing_line_rolls_back_earlier_lines() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Carol").await;
    let plenty = create_product(&system, "Plenty", 1.0, 50).await;
    let scarce = create_product(&system, "Scarce", 1.0, 1).await;

    let err = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(plenty, 5), OrderLine::new(scarce, 2)],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStock { product_id, .. } if product_id == scarce));
    assert_eq!(stock(&system, plenty).await, 50);
    assert_eq!(stock(&system, scarce).await, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_and_product() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Dave").await;
    let product = create_product(&system, "Widget", 3.0, 5).await;

    let err = system
        .order_client
        .create_order(OrderCreate {
            user_id: UserId(999),
            lines: vec![OrderLine::new(product, 1)],
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::UserNotFound(UserId(999)));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 1), OrderLine::new(ProductId(999), 1)],
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::ProductNotFound(ProductId(999)));
    assert_eq!(stock(&system, product).await, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_validation_happens_before_any_lookup() {
    let system = OrderSystem::new();
    let product = create_product(&system, "Widget", 3.0, 5).await;

    // No user exists at all: validation must still be the reported failure.
    let empty = system
        .order_client
        .create_order(OrderCreate {
            user_id: UserId(1),
            lines: Vec::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(empty.kind(), ErrorKind::Validation);

    let zero = system
        .order_client
        .create_order(OrderCreate {
            user_id: UserId(1),
            lines: vec![OrderLine::new(product, 0)],
        })
        .await
        .unwrap_err();
    assert_eq!(zero.kind(), ErrorKind::Validation);
    assert_eq!(stock(&system, product).await, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_restores_stock_exactly_once() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Erin").await;
    let p1 = create_product(&system, "Widget", 10.0, 10).await;
    let p2 = create_product(&system, "Gadget", 5.0, 4).await;

    let order = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(p1, 3), OrderLine::new(p2, 4)],
        })
        .await
        .unwrap();
    assert_eq!(stock(&system, p2).await, 0);

    let status = system.order_client.cancel_order(order.id()).await.unwrap();
    assert_eq!(status, OrderStatus::Cancelled);
    assert_eq!(stock(&system, p1).await, 10);
    assert_eq!(stock(&system, p2).await, 4);

    let again = system.order_client.cancel_order(order.id()).await.unwrap_err();
    assert_eq!(
        again,
        OrderError::AlreadyFinalized {
            order_id: order.id(),
            status: OrderStatus::Cancelled,
        }
    );
    assert_eq!(stock(&system, p1).await, 10);
    assert_eq!(stock(&system, p2).await, 4);

    let stored = system.order_client.get_order(order.id()).await.unwrap();
    assert_eq!(stored.status(), OrderStatus::Cancelled);
    assert!(stored.updated_at() >= stored.created_at());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_completed_order_cannot_be_cancelled() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Frank").await;
    let product = create_product(&system, "Widget", 2.0, 5).await;

    let order = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 2)],
        })
        .await
        .unwrap();

    assert_eq!(
        system.order_client.complete_order(order.id()).await,
        Ok(OrderStatus::Completed)
    );
    let err = system.order_client.cancel_order(order.id()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(stock(&system, product).await, 3);

    let missing = system.order_client.cancel_order(order_ledger::model::OrderId(42)).await;
    assert_eq!(missing, Err(OrderError::NotFound(order_ledger::model::OrderId(42))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_change_does_not_touch_placed_orders() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Grace").await;
    let product = create_product(&system, "Widget", 10.0, 10).await;

    let order = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 2)],
        })
        .await
        .unwrap();

    let updated = system
        .inventory_client
        .update_product(
            product,
            ProductUpdate {
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 99.0);
    assert_eq!(updated.stock(), 8);

    let stored = system.order_client.get_order(order.id()).await.unwrap();
    assert_eq!(stored.items()[0].unit_price, 10.0);
    assert_eq!(stored.total(), 20.0);

    let next = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 1)],
        })
        .await
        .unwrap();
    assert_eq!(next.total(), 99.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_orders_paging() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Heidi").await;
    let product = create_product(&system, "Widget", 1.0, 100).await;

    for _ in 0..5 {
        system
            .order_client
            .create_order(OrderCreate {
                user_id,
                lines: vec![OrderLine::new(product, 1)],
            })
            .await
            .unwrap();
    }

    let first = system.order_client.list_orders(1, Some(2)).await.unwrap();
    assert_eq!((first.total, first.page, first.page_size), (5, 1, 2));
    assert_eq!(first.items.len(), 2);
    assert!(first.items[0].id() < first.items[1].id());

    let last = system.order_client.list_orders(3, Some(2)).await.unwrap();
    assert_eq!(last.items.len(), 1);

    let beyond = system.order_client.list_orders(4, Some(2)).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 5);

    let clamped = system.order_client.list_orders(0, Some(1000)).await.unwrap();
    assert_eq!((clamped.page, clamped.page_size), (1, 100));
    assert_eq!(clamped.items.len(), 5);

    let default = system.order_client.list_orders(1, None).await.unwrap();
    assert_eq!(default.page_size, 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_lookup_through_generic_get() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Ivan").await;

    let user = system.user_client.get(user_id).await.unwrap().expect("User not found");
    assert_eq!(user.name, "Ivan");
    assert_eq!(user.email, "ivan@example.com");
    assert_eq!(system.user_client.get(UserId(77)).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_products_cannot_be_deleted_under_pending_orders() {
    let system = OrderSystem::new();
    let user_id = create_user(&system, "Judy").await;
    let product = create_product(&system, "Widget", 4.0, 6).await;

    let order = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            lines: vec![OrderLine::new(product, 2)],
        })
        .await
        .unwrap();

    assert!(system.inventory_client.inner().delete(product).await.is_err());
    assert_eq!(stock(&system, product).await, 4);

    assert_eq!(
        system.order_client.cancel_order(order.id()).await,
        Ok(OrderStatus::Cancelled)
    );
    assert_eq!(stock(&system, product).await, 6);

    system.shutdown().await.unwrap();
}
