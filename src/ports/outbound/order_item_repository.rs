use crate::ordering::domain::{OrderId, OrderItem};
use crate::shared::Result;
use async_trait::async_trait;

/// OrderItemRepository port for order line storage
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    type Transaction: Send;

    /// Persists a whole batch of items in one call
    async fn save_all(&self, tx: &mut Self::Transaction, items: &[OrderItem]) -> Result<()>;

    /// Items of one order, in the order they were saved
    async fn find_by_order_id(
        &self,
        tx: &mut Self::Transaction,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>>;
}
