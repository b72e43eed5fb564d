/// Data Transfer Objects for the application layer
///
/// Requests arrive from the driving adapters (CLI) and responses leave
/// towards presenters, keeping the domain types behind the use case.
mod create_order_request;
mod order_response;

pub use create_order_request::{
    CreateOrderItemRequest, CreateOrderRequest, CreateOrderRequestBuilder,
};
pub use order_response::{OrderItemResponse, OrderResponse};
