//! gc-coffee-orders - order management for a coffee bean shop
//!
//! This library places, looks up, deletes and ships orders against a
//! product catalog, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`ordering`): Orders, items, products and the shipping window
//! - **Application Layer** (`application`): The order orchestrator and its DTOs
//! - **Ports** (`ports`): Interface definitions for storage and presentation
//! - **Adapters** (`adapters`): The transactional store and the console presenter
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gc_coffee_orders::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let database = Database::open("gc-orders.data.json")?;
//! let product = Product::new(
//!     ProductId::generate(),
//!     "Columbia Narino".to_string(),
//!     "COFFEE_BEAN_PACKAGE".to_string(),
//!     5000,
//!     None,
//! )?;
//! database.upsert_products(vec![product.clone()]).await?;
//!
//! let orchestrator = OrderOrchestrator::new(
//!     database.clone(),
//!     database.clone(),
//!     database.clone(),
//!     database,
//! );
//!
//! let request = CreateOrderRequest::builder()
//!     .email("alice@example.com")
//!     .address("1 Bean Street")
//!     .postcode("04524")
//!     .item(product.product_id(), 2)
//!     .build()?;
//! let response = orchestrator.create_order(request).await?;
//! println!("{}", render_json(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod logging;
pub mod ordering;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{render_json, StdoutPresenter};
    pub use crate::adapters::outbound::persistence::{Database, DatabaseTransaction};
    pub use crate::application::dto::{
        CreateOrderItemRequest, CreateOrderRequest, OrderItemResponse, OrderResponse,
    };
    pub use crate::application::use_cases::OrderOrchestrator;
    pub use crate::ordering::domain::{
        Email, Order, OrderId, OrderItem, OrderStatus, Product, ProductId, ShippingWindow,
    };
    pub use crate::ports::inbound::OrderManagementPort;
    pub use crate::ports::outbound::{
        OrderItemRepository, OrderRepository, OutputPresenter, ProductRepository,
        TransactionManager,
    };
    pub use crate::shared::error::{ExitCode, OrderError};
    pub use crate::shared::Result;
}
