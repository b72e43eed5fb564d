use super::{Order, OrderId, Product};
use crate::shared::error::OrderError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One product line of an order.
///
/// Holds a snapshot of the product taken when the order was placed, so later
/// catalog edits never change what the customer paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    item_id: Uuid,
    order_id: OrderId,
    product: Product,
    quantity: u32,
}

impl OrderItem {
    /// Creates a line item bound to an already persisted order.
    ///
    /// # Errors
    /// Returns a validation error when `quantity` is zero.
    pub fn new(order: &Order, product: Product, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(OrderError::validation(format!(
                "Quantity for product {} must be greater than zero",
                product.product_id()
            ))
            .into());
        }

        Ok(Self {
            item_id: Uuid::new_v4(),
            order_id: order.order_id(),
            product,
            quantity,
        })
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price at order time
    pub fn price(&self) -> u64 {
        self.product.price()
    }

    pub fn line_total(&self) -> u64 {
        self.product.price().saturating_mul(u64::from(self.quantity))
    }
}
