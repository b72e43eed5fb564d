use crate::ordering::domain::{Product, ProductId};
use crate::shared::Result;
use async_trait::async_trait;

/// ProductRepository port - batch lookup into the product catalog
///
/// The catalog is owned elsewhere; the ordering context only reads it.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    type Transaction: Send;

    /// Fetches every product whose id is in `product_ids` in a single call.
    ///
    /// Ids with no matching product are simply absent from the result; the
    /// caller decides whether that is an error. No ordering is guaranteed.
    async fn find_all_by_ids(
        &self,
        tx: &mut Self::Transaction,
        product_ids: &[ProductId],
    ) -> Result<Vec<Product>>;
}
