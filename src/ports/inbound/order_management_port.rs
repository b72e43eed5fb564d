use crate::application::dto::{CreateOrderRequest, OrderResponse};
use crate::ordering::domain::{Order, OrderId, ShippingWindow};
use crate::shared::Result;
use async_trait::async_trait;

/// OrderManagementPort - Inbound port for the order slice
///
/// This is the application's public API; the CLI only talks to this trait.
/// Every operation is atomic: it either completes fully or leaves storage
/// untouched.
#[async_trait]
pub trait OrderManagementPort: Send + Sync {
    /// Places an order and its items
    ///
    /// # Errors
    /// Returns an error if:
    /// - A requested product does not exist (`ProductNotFound`)
    /// - Storage fails (nothing is persisted in that case)
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderResponse>;

    /// # Errors
    /// Returns `OrderNotFound` if no order has this id
    async fn get_order(&self, order_id: OrderId) -> Result<OrderResponse>;

    /// # Errors
    /// Returns `OrderNotFound` if no order has this id
    async fn find_order_by_id(&self, order_id: OrderId) -> Result<Order>;

    /// # Errors
    /// Returns `OrderNotFound` if no order has this id
    async fn delete_order(&self, order_id: OrderId) -> Result<()>;

    /// Marks every order created inside `window` as shipped
    async fn update_order_status(&self, window: ShippingWindow) -> Result<()>;
}
