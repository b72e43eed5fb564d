pub mod order;
pub mod order_item;
pub mod product;
pub mod shipping_window;

pub use order::{Email, Order, OrderId, OrderStatus};
pub use order_item::OrderItem;
pub use product::{Product, ProductId};
pub use shipping_window::ShippingWindow;
