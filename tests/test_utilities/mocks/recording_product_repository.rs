use async_trait::async_trait;
use gc_coffee_orders::prelude::*;
use std::sync::{Arc, Mutex};

/// ProductRepository that records every batch lookup before delegating
#[derive(Clone)]
pub struct RecordingProductRepository {
    pub database: Database,
    pub lookups: Arc<Mutex<Vec<Vec<ProductId>>>>,
}

impl RecordingProductRepository {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_lookups(&self) -> Vec<Vec<ProductId>> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for RecordingProductRepository {
    type Transaction = DatabaseTransaction;

    async fn find_all_by_ids(
        &self,
        tx: &mut DatabaseTransaction,
        product_ids: &[ProductId],
    ) -> Result<Vec<Product>> {
        self.lookups.lock().unwrap().push(product_ids.to_vec());
        self.database.find_all_by_ids(tx, product_ids).await
    }
}
