//! # Inventory Client
//!
//! High-level API over the Product actor: catalogue CRUD plus the stock ledger.
//! Single-product calls map to one action each; [`InventoryClient::reserve_all`] and
//! [`InventoryClient::restock_all`] batch several products into one unit of work.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient, Unit};
use crate::inventory_actor::{ProductAction, ProductActionResult, ProductError, Reservation};
use crate::model::{OrderLine, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Product>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for InventoryClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

/// Maps a framework error for a request about `id`, turning the actor's untyped
/// not-found into the typed one.
fn for_product(id: ProductId) -> impl FnOnce(FrameworkError) -> ProductError {
    move |e| match e {
        FrameworkError::NotFound(_) => ProductError::NotFound(id),
        other => ProductError::from(other),
    }
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Like [`ActorClient::get`], but a missing product is an error.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(for_product(id))
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(for_product(id))?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => unreachable!("CheckStock returned {:?}", other),
        }
    }

    /// Takes `quantity` units if available, reporting the price at that instant.
    #[instrument(skip(self))]
    pub async fn try_decrement(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<Reservation, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::TryDecrement(quantity))
            .await
            .map_err(for_product(id))?
        {
            ProductActionResult::Decremented(reservation) => Ok(reservation),
            other => unreachable!("TryDecrement returned {:?}", other),
        }
    }

    /// Returns `quantity` units to stock. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::Increment(quantity))
            .await
            .map_err(for_product(id))?
        {
            ProductActionResult::Incremented(level) => Ok(level),
            other => unreachable!("Increment returned {:?}", other),
        }
    }

    /// Opens a unit of ledger actions that commits all-or-nothing.
    pub fn begin_unit(&self) -> Unit<Product> {
        self.inner.begin_unit()
    }

    /// Takes stock for every line in one unit. Either every line is reserved or none is.
    ///
    /// Reservations come back in line order.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn reserve_all(&self, lines: &[OrderLine]) -> Result<Vec<Reservation>, ProductError> {
        let mut unit = self.begin_unit();
        for line in lines {
            unit.stage(line.product_id, ProductAction::TryDecrement(line.quantity));
        }
        let results = unit.commit().await?;
        debug!(reserved = results.len(), "Unit committed");

        Ok(results
            .into_iter()
            .map(|result| match result {
                ProductActionResult::Decremented(reservation) => reservation,
                other => unreachable!("TryDecrement returned {:?}", other),
            })
            .collect())
    }

    /// Returns stock for every `(product, quantity)` pair in one unit.
    #[instrument(skip(self, restock), fields(products = restock.len()))]
    pub async fn restock_all(&self, restock: &[(ProductId, u32)]) -> Result<(), ProductError> {
        let mut unit = self.begin_unit();
        for &(product_id, quantity) in restock {
            unit.stage(product_id, ProductAction::Increment(quantity));
        }
        unit.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_commit, MockClient};
    use crate::framework::UnitError;

    fn reservation(product: u32, quantity: u32, unit_price: f64, remaining: u32) -> Reservation {
        Reservation {
            product_id: ProductId(product),
            quantity,
            unit_price,
            remaining,
        }
    }

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let inventory = InventoryClient::new(client);

        let check_task = tokio::spawn(async move { inventory.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);

        responder.send(Ok(ProductActionResult::CheckStock(42))).unwrap();

        assert_eq!(check_task.await.unwrap(), Ok(42));
    }

    #[tokio::test]
    async fn test_try_decrement_insufficient_stock_is_typed() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let inventory = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory.try_decrement(ProductId(1), 100).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ProductAction::TryDecrement(100));

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    product_id: ProductId(1),
                    requested: 100,
                    available: 7,
                },
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::InsufficientStock {
                product_id: ProductId(1),
                requested: 100,
                available: 7,
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_product_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let inventory = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory.increment(ProductId(5), 1).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(ProductId(5).to_string())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(ProductError::NotFound(ProductId(5))));
    }

    #[tokio::test]
    async fn test_reserve_all_stages_one_decrement_per_line() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let inventory = InventoryClient::new(client);

        let lines = vec![OrderLine::new(ProductId(1), 2), OrderLine::new(ProductId(2), 1)];
        let task = tokio::spawn(async move { inventory.reserve_all(&lines).await });

        let (steps, responder) = expect_commit(&mut receiver)
            .await
            .expect("Expected Commit request");
        assert_eq!(
            steps,
            vec![
                (ProductId(1), ProductAction::TryDecrement(2)),
                (ProductId(2), ProductAction::TryDecrement(1)),
            ]
        );

        let _ = responder.send(Ok(vec![
            ProductActionResult::Decremented(reservation(1, 2, 10.0, 8)),
            ProductActionResult::Decremented(reservation(2, 1, 5.0, 4)),
        ]));

        let reserved = task.await.unwrap().unwrap();
        assert_eq!(reserved, vec![reservation(1, 2, 10.0, 8), reservation(2, 1, 5.0, 4)]);
    }

    #[tokio::test]
    #[should_panic(expected = "TryDecrement returned")]
    async fn test_reserve_all_refuses_foreign_results() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_commit()
            .return_ok(vec![ProductActionResult::Incremented(3)]);
        let inventory = InventoryClient::new(mock.client());

        let _ = inventory.reserve_all(&[OrderLine::new(ProductId(1), 1)]).await;
    }

    #[tokio::test]
    async fn test_reserve_all_reports_the_rejecting_step() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_commit().return_err(UnitError::Rejected {
            step: 1,
            id: ProductId(2),
            source: ProductError::InsufficientStock {
                product_id: ProductId(2),
                requested: 1000,
                available: 10,
            },
        });
        let inventory = InventoryClient::new(mock.client());

        let result = inventory
            .reserve_all(&[OrderLine::new(ProductId(1), 1), OrderLine::new(ProductId(2), 1000)])
            .await;
        assert_eq!(
            result,
            Err(ProductError::InsufficientStock {
                product_id: ProductId(2),
                requested: 1000,
                available: 10,
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_restock_all_transport_failure() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_commit()
            .return_err(UnitError::Framework(FrameworkError::ActorDropped));
        let inventory = InventoryClient::new(mock.client());

        let result = inventory.restock_all(&[(ProductId(1), 3)]).await;
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_restock_does_not_contact_the_actor() {
        let mock = MockClient::<Product>::new();
        let inventory = InventoryClient::new(mock.client());

        assert_eq!(inventory.restock_all(&[]).await, Ok(()));
        mock.verify();
    }
}
