use crate::application::dto::{CreateOrderRequest, OrderItemResponse, OrderResponse};
use crate::ordering::domain::{
    Order, OrderId, OrderItem, OrderStatus, Product, ProductId, ShippingWindow,
};
use crate::ports::inbound::OrderManagementPort;
use crate::ports::outbound::{
    OrderItemRepository, OrderRepository, ProductRepository, TransactionManager,
};
use crate::shared::error::OrderError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// OrderOrchestrator - Core use case for the order slice
///
/// Orchestrates order creation, lookup, deletion and the shipping batch
/// using generic dependency injection for every storage collaborator.
/// Each operation runs in exactly one transaction obtained from the
/// transaction manager, committed on success and rolled back on failure.
///
/// # Type Parameters
/// * `TM` - TransactionManager implementation
/// * `OR` - OrderRepository implementation
/// * `PR` - ProductRepository implementation
/// * `IR` - OrderItemRepository implementation
pub struct OrderOrchestrator<TM, OR, PR, IR> {
    transaction_manager: TM,
    order_repository: OR,
    product_repository: PR,
    order_item_repository: IR,
}

impl<TM, OR, PR, IR> OrderOrchestrator<TM, OR, PR, IR>
where
    TM: TransactionManager,
    OR: OrderRepository<Transaction = TM::Transaction>,
    PR: ProductRepository<Transaction = TM::Transaction>,
    IR: OrderItemRepository<Transaction = TM::Transaction>,
{
    /// Creates a new OrderOrchestrator with injected dependencies
    pub fn new(
        transaction_manager: TM,
        order_repository: OR,
        product_repository: PR,
        order_item_repository: IR,
    ) -> Self {
        Self {
            transaction_manager,
            order_repository,
            product_repository,
            order_item_repository,
        }
    }

    /// Body of order creation, run inside the caller's transaction
    async fn place_order(
        &self,
        tx: &mut TM::Transaction,
        request: &CreateOrderRequest,
    ) -> Result<OrderResponse> {
        // Step 1: Persist the header first, items reference its id
        let order = request.to_order(Utc::now());
        self.order_repository.save(tx, &order).await?;
        debug!(order_id = %order.order_id(), "Order header saved");

        // Step 2: Collect the referenced product ids
        let product_ids = Self::extract_product_ids(request);

        // Step 3: One batch lookup for every product
        let products = self
            .product_repository
            .find_all_by_ids(tx, &product_ids)
            .await?;
        let product_map = Self::index_products(products);

        // Step 4: Join each requested line with its product
        let order_items = Self::build_order_items(request, &product_map, &order)?;

        // Step 5: Persist the items as one batch
        self.order_item_repository.save_all(tx, &order_items).await?;

        // Step 6: Build the response
        let item_responses = OrderItemResponse::from_items(&order_items);

        info!(
            order_id = %order.order_id(),
            items = order_items.len(),
            "Order placed"
        );

        Ok(OrderResponse::of(&order, item_responses))
    }

    /// Resolves an order inside `tx` or fails with `OrderNotFound`
    async fn find_order_in(&self, tx: &mut TM::Transaction, order_id: OrderId) -> Result<Order> {
        self.order_repository
            .find_by_order_id(tx, order_id)
            .await?
            .ok_or_else(|| {
                OrderError::OrderNotFound {
                    order_id: order_id.to_string(),
                }
                .into()
            })
    }

    async fn load_order_response(
        &self,
        tx: &mut TM::Transaction,
        order_id: OrderId,
    ) -> Result<OrderResponse> {
        let order = self.find_order_in(tx, order_id).await?;
        let items = self
            .order_item_repository
            .find_by_order_id(tx, order_id)
            .await?;
        Ok(OrderResponse::of(&order, OrderItemResponse::from_items(&items)))
    }

    async fn remove_order(&self, tx: &mut TM::Transaction, order_id: OrderId) -> Result<()> {
        let order = self.find_order_in(tx, order_id).await?;
        self.order_repository
            .delete_by_order_id(tx, order.order_id())
            .await
    }

    /// Commits on success, rolls back on failure.
    ///
    /// A failed rollback is logged; the original error is what the caller sees.
    async fn finish<T: Send>(&self, tx: TM::Transaction, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.transaction_manager.commit(tx).await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = self.transaction_manager.rollback(tx).await {
                    warn!(error = %rollback_error, "Rollback failed");
                }
                Err(error)
            }
        }
    }

    /// Distinct product ids in first-appearance order
    fn extract_product_ids(request: &CreateOrderRequest) -> Vec<ProductId> {
        let mut seen = HashSet::new();
        request
            .items
            .iter()
            .map(|line| line.product_id)
            .filter(|product_id| seen.insert(*product_id))
            .collect()
    }

    fn index_products(products: Vec<Product>) -> HashMap<ProductId, Product> {
        products
            .into_iter()
            .map(|product| (product.product_id(), product))
            .collect()
    }

    /// Builds one item per requested line, in request order.
    ///
    /// # Errors
    /// Returns `ProductNotFound` for the first line whose product was not
    /// returned by the batch lookup.
    fn build_order_items(
        request: &CreateOrderRequest,
        product_map: &HashMap<ProductId, Product>,
        order: &Order,
    ) -> Result<Vec<OrderItem>> {
        request
            .items
            .iter()
            .map(|line| {
                let product = product_map.get(&line.product_id).cloned().ok_or_else(|| {
                    OrderError::ProductNotFound {
                        product_id: line.product_id.to_string(),
                    }
                })?;
                OrderItem::new(order, product, line.quantity)
            })
            .collect()
    }
}

#[async_trait]
impl<TM, OR, PR, IR> OrderManagementPort for OrderOrchestrator<TM, OR, PR, IR>
where
    TM: TransactionManager,
    OR: OrderRepository<Transaction = TM::Transaction>,
    PR: ProductRepository<Transaction = TM::Transaction>,
    IR: OrderItemRepository<Transaction = TM::Transaction>,
{
    #[instrument(skip_all, fields(lines = request.items.len()))]
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderResponse> {
        let mut tx = self.transaction_manager.begin().await?;
        let outcome = self.place_order(&mut tx, &request).await;
        self.finish(tx, outcome).await
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: OrderId) -> Result<OrderResponse> {
        let mut tx = self.transaction_manager.begin().await?;
        let outcome = self.load_order_response(&mut tx, order_id).await;
        self.finish(tx, outcome).await
    }

    #[instrument(skip(self))]
    async fn find_order_by_id(&self, order_id: OrderId) -> Result<Order> {
        let mut tx = self.transaction_manager.begin().await?;
        let outcome = self.find_order_in(&mut tx, order_id).await;
        self.finish(tx, outcome).await
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, order_id: OrderId) -> Result<()> {
        let mut tx = self.transaction_manager.begin().await?;
        let outcome = self.remove_order(&mut tx, order_id).await;
        self.finish(tx, outcome).await?;
        info!(order_id = %order_id, "Order deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(start = %window.start(), end = %window.end()))]
    async fn update_order_status(&self, window: ShippingWindow) -> Result<()> {
        let mut tx = self.transaction_manager.begin().await?;
        let outcome = self
            .order_repository
            .update_status_in_range(&mut tx, OrderStatus::Shipped, &window, Utc::now())
            .await;
        let shipped = self.finish(tx, outcome).await?;
        info!(shipped, "Shipping window applied");
        Ok(())
    }
}
