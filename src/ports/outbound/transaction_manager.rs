use crate::shared::Result;
use async_trait::async_trait;

/// TransactionManager port for unit-of-work demarcation
///
/// The application core opens one transaction per operation, passes it by
/// `&mut` to every repository call, and finishes it explicitly. Dropping a
/// transaction without committing must behave like a rollback.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Handle threaded through repository calls
    type Transaction: Send;

    /// Opens a new unit of work
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot start a transaction
    async fn begin(&self) -> Result<Self::Transaction>;

    /// Makes every write performed through `tx` durable and visible
    ///
    /// # Errors
    /// Returns an error if the writes cannot be published; in that case
    /// none of them are.
    async fn commit(&self, tx: Self::Transaction) -> Result<()>;

    /// Discards every write performed through `tx`
    ///
    /// # Errors
    /// Returns an error if the store reports a failure while discarding
    async fn rollback(&self, tx: Self::Transaction) -> Result<()>;
}
