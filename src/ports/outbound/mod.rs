/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The order store, product lookup and order-item store all operate inside a
/// transaction handed out by the `TransactionManager`; an adapter family
/// ties them together through the shared `Transaction` associated type.
pub mod order_item_repository;
pub mod order_repository;
pub mod output_presenter;
pub mod product_repository;
pub mod transaction_manager;

pub use order_item_repository::OrderItemRepository;
pub use order_repository::OrderRepository;
pub use output_presenter::OutputPresenter;
pub use product_repository::ProductRepository;
pub use transaction_manager::TransactionManager;
