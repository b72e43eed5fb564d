/// Mock implementations for testing
mod failing_order_item_repository;
mod mock_output_presenter;
mod recording_product_repository;

pub use failing_order_item_repository::FailingOrderItemRepository;
pub use mock_output_presenter::MockOutputPresenter;
pub use recording_product_repository::RecordingProductRepository;
