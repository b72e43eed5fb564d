/// Result alias used across every layer of the order slice.
///
/// Domain failures are `OrderError` values wrapped in `anyhow::Error`;
/// callers that need to branch on them use `downcast_ref::<OrderError>()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
