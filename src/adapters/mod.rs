/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the transactional store and the console presenter.
pub mod outbound;
