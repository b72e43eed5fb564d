use async_trait::async_trait;
use gc_coffee_orders::prelude::*;

/// OrderItemRepository whose batch insert always fails
///
/// Reads go to the wrapped database so the rest of the flow stays real.
#[derive(Clone)]
pub struct FailingOrderItemRepository {
    pub database: Database,
}

impl FailingOrderItemRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl OrderItemRepository for FailingOrderItemRepository {
    type Transaction = DatabaseTransaction;

    async fn save_all(&self, _tx: &mut DatabaseTransaction, _items: &[OrderItem]) -> Result<()> {
        anyhow::bail!("Mock order item repository failure");
    }

    async fn find_by_order_id(
        &self,
        tx: &mut DatabaseTransaction,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>> {
        OrderItemRepository::find_by_order_id(&self.database, tx, order_id).await
    }
}
