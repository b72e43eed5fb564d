use crate::ordering::domain::{Order, OrderId, OrderItem, OrderStatus, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response line for one order item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemResponse {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub price: u64,
    pub quantity: u32,
}

impl OrderItemResponse {
    pub fn from_item(item: &OrderItem) -> Self {
        let product = item.product();
        Self {
            product_id: product.product_id(),
            product_name: product.name().to_string(),
            category: product.category().to_string(),
            price: item.price(),
            quantity: item.quantity(),
        }
    }

    /// Maps items one-to-one, keeping their order.
    pub fn from_items(items: &[OrderItem]) -> Vec<Self> {
        items.iter().map(Self::from_item).collect()
    }
}

/// OrderResponse - response DTO returned by create and get
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderResponse {
    pub order_id: OrderId,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
    pub total_price: u64,
}

impl OrderResponse {
    pub fn of(order: &Order, items: Vec<OrderItemResponse>) -> Self {
        let total_price = items
            .iter()
            .map(|item| item.price.saturating_mul(u64::from(item.quantity)))
            .fold(0u64, u64::saturating_add);

        Self {
            order_id: order.order_id(),
            email: order.email().to_string(),
            address: order.address().to_string(),
            postcode: order.postcode().to_string(),
            status: order.status(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
            items,
            total_price,
        }
    }
}
