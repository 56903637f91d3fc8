//! [`ActorEntity`] implementation for [`Product`]: catalogue CRUD plus the ledger actions.

use super::actions::{ProductAction, ProductActionResult, Reservation};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::ValidationError(format!("invalid price: {}", price)));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    /// Catalogue edits only. Stock is not part of [`ProductUpdate`].
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    /// Orders keep referencing their products for restocks, so products are never removed.
    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(ProductError::ValidationError(format!("{} cannot be deleted", self.id)))
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::TryDecrement(0) | ProductAction::Increment(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::TryDecrement(quantity) => {
                if self.stock < quantity {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id,
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::Decremented(Reservation {
                    product_id: self.id,
                    quantity,
                    unit_price: self.price,
                    remaining: self.stock,
                }))
            }
            ProductAction::Increment(quantity) => {
                self.stock = self.stock.checked_add(quantity).ok_or(ProductError::StockOverflow {
                    product_id: self.id,
                    stock: self.stock,
                    increment: quantity,
                })?;
                Ok(ProductActionResult::Incremented(self.stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: u32) -> Product {
        Product::new(ProductId(1), "Widget", 2.5, stock)
    }

    #[tokio::test]
    async fn test_try_decrement_takes_stock_and_snapshots_price() {
        let mut product = widget(5);
        let result = product.handle_action(ProductAction::TryDecrement(3), &()).await.unwrap();
        assert_eq!(
            result,
            ProductActionResult::Decremented(Reservation {
                product_id: ProductId(1),
                quantity: 3,
                unit_price: 2.5,
                remaining: 2,
            })
        );
        assert_eq!(product.stock(), 2);
    }

    #[tokio::test]
    async fn test_try_decrement_beyond_stock_is_refused() {
        let mut product = widget(2);
        let err = product.handle_action(ProductAction::TryDecrement(3), &()).await.unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product_id: ProductId(1),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(product.stock(), 2);
    }

    #[tokio::test]
    async fn test_zero_quantities_are_invalid() {
        let mut product = widget(2);
        for action in [ProductAction::TryDecrement(0), ProductAction::Increment(0)] {
            let err = product.handle_action(action, &()).await.unwrap_err();
            assert_eq!(err, ProductError::InvalidQuantity(0));
        }
    }

    #[tokio::test]
    async fn test_increment_overflow_leaves_stock_untouched() {
        let mut product = widget(u32::MAX - 1);
        let err = product.handle_action(ProductAction::Increment(2), &()).await.unwrap_err();
        assert!(matches!(err, ProductError::StockOverflow { .. }));
        assert_eq!(product.stock(), u32::MAX - 1);

        let ok = product.handle_action(ProductAction::Increment(1), &()).await.unwrap();
        assert_eq!(ok, ProductActionResult::Incremented(u32::MAX));
    }

    #[tokio::test]
    async fn test_delete_is_refused() {
        let product = widget(3);
        assert!(matches!(
            product.on_delete(&()).await,
            Err(ProductError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_negative_price() {
        let mut product = widget(1);
        let update = ProductUpdate {
            name: None,
            price: Some(-1.0),
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.price, 2.5);
    }
}
