use crate::shared::Result;

/// OutputPresenter port for presenting command results
///
/// The CLI renders responses as JSON and hands them here, so the core never
/// writes to stdout directly.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
