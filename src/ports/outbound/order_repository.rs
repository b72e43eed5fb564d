use crate::ordering::domain::{Order, OrderId, OrderStatus, ShippingWindow};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// OrderRepository port for the order header store
#[async_trait]
pub trait OrderRepository: Send + Sync {
    type Transaction: Send;

    /// Inserts or replaces the order header
    async fn save(&self, tx: &mut Self::Transaction, order: &Order) -> Result<()>;

    async fn find_by_order_id(
        &self,
        tx: &mut Self::Transaction,
        order_id: OrderId,
    ) -> Result<Option<Order>>;

    /// Removes the order; removing an unknown id is not an error here
    async fn delete_by_order_id(&self, tx: &mut Self::Transaction, order_id: OrderId)
        -> Result<()>;

    /// Bulk status update for orders created inside `window`
    ///
    /// # Arguments
    /// * `status` - Target status
    /// * `window` - Half-open creation-time window
    /// * `now` - Timestamp recorded as `updated_at` on changed orders
    ///
    /// # Returns
    /// Number of orders whose status actually changed
    async fn update_status_in_range(
        &self,
        tx: &mut Self::Transaction,
        status: OrderStatus,
        window: &ShippingWindow,
        now: DateTime<Utc>,
    ) -> Result<usize>;
}
