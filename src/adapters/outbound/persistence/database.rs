use super::SnapshotFile;
use crate::ordering::domain::{
    Order, OrderId, OrderItem, OrderStatus, Product, ProductId, ShippingWindow,
};
use crate::ports::outbound::{
    OrderItemRepository, OrderRepository, ProductRepository, TransactionManager,
};
use crate::shared::error::OrderError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

/// Committed state of every table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub products: BTreeMap<ProductId, Product>,
    #[serde(default)]
    pub orders: BTreeMap<OrderId, Order>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

/// Database - transactional in-memory store with an optional JSON snapshot
///
/// Implements `TransactionManager` and all three repository ports over the
/// same tables. A transaction holds the table lock from `begin` until it is
/// committed or rolled back, so transactions are serialized. Writes land in
/// a working copy that replaces the committed tables only on commit.
///
/// Cloning is cheap and every clone shares the same tables, which is how one
/// database is handed to several collaborators.
#[derive(Debug, Clone)]
pub struct Database {
    tables: Arc<Mutex<Tables>>,
    snapshot: Option<Arc<SnapshotFile>>,
}

/// Open unit of work on a [`Database`]
pub struct DatabaseTransaction {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

impl Database {
    /// Database that lives only as long as the process
    pub fn in_memory() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            snapshot: None,
        }
    }

    /// Opens a database backed by the JSON file at `path`
    ///
    /// A missing file starts an empty database; the file is created by the
    /// first commit that changes a table.
    ///
    /// # Errors
    /// Returns `StorageError` if the existing file cannot be loaded
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let snapshot = SnapshotFile::new(path.as_ref());
        let tables = snapshot.load()?;
        info!(
            path = %snapshot.path().display(),
            products = tables.products.len(),
            orders = tables.orders.len(),
            "Data file loaded"
        );
        Ok(Self {
            tables: Arc::new(Mutex::new(tables)),
            snapshot: Some(Arc::new(snapshot)),
        })
    }

    /// Inserts or replaces catalog entries in a single transaction
    pub async fn upsert_products(&self, products: Vec<Product>) -> Result<()> {
        let mut tx = self.begin().await?;
        for product in products {
            tx.working.products.insert(product.product_id(), product);
        }
        self.commit(tx).await
    }

    /// Committed catalog, ordered by product id
    pub async fn products(&self) -> Vec<Product> {
        self.tables.lock().await.products.values().cloned().collect()
    }

    /// Copy of the committed tables
    pub async fn snapshot(&self) -> Tables {
        self.tables.lock().await.clone()
    }
}

#[async_trait]
impl TransactionManager for Database {
    type Transaction = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction> {
        let guard = self.tables.clone().lock_owned().await;
        let working = guard.clone();
        Ok(DatabaseTransaction { guard, working })
    }

    async fn commit(&self, tx: DatabaseTransaction) -> Result<()> {
        let DatabaseTransaction { mut guard, working } = tx;
        if working == *guard {
            debug!("Transaction committed without changes");
            return Ok(());
        }
        if let Some(snapshot) = &self.snapshot {
            snapshot.write(&working)?;
        }
        *guard = working;
        debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(&self, tx: DatabaseTransaction) -> Result<()> {
        drop(tx);
        debug!("Transaction rolled back");
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for Database {
    type Transaction = DatabaseTransaction;

    async fn save(&self, tx: &mut DatabaseTransaction, order: &Order) -> Result<()> {
        tx.working.orders.insert(order.order_id(), order.clone());
        Ok(())
    }

    async fn find_by_order_id(
        &self,
        tx: &mut DatabaseTransaction,
        order_id: OrderId,
    ) -> Result<Option<Order>> {
        Ok(tx.working.orders.get(&order_id).cloned())
    }

    async fn delete_by_order_id(
        &self,
        tx: &mut DatabaseTransaction,
        order_id: OrderId,
    ) -> Result<()> {
        if tx.working.orders.remove(&order_id).is_some() {
            tx.working
                .order_items
                .retain(|item| item.order_id() != order_id);
        }
        Ok(())
    }

    async fn update_status_in_range(
        &self,
        tx: &mut DatabaseTransaction,
        status: OrderStatus,
        window: &ShippingWindow,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let mut changed = 0;
        for order in tx.working.orders.values_mut() {
            if window.contains(order.created_at()) && order.transition_to(status, now)? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

#[async_trait]
impl ProductRepository for Database {
    type Transaction = DatabaseTransaction;

    async fn find_all_by_ids(
        &self,
        tx: &mut DatabaseTransaction,
        product_ids: &[ProductId],
    ) -> Result<Vec<Product>> {
        Ok(product_ids
            .iter()
            .filter_map(|product_id| tx.working.products.get(product_id).cloned())
            .collect())
    }
}

#[async_trait]
impl OrderItemRepository for Database {
    type Transaction = DatabaseTransaction;

    async fn save_all(&self, tx: &mut DatabaseTransaction, items: &[OrderItem]) -> Result<()> {
        if let Some(orphan) = items
            .iter()
            .find(|item| !tx.working.orders.contains_key(&item.order_id()))
        {
            return Err(OrderError::validation(format!(
                "Order item references unknown order {}",
                orphan.order_id()
            ))
            .into());
        }
        tx.working.order_items.extend(items.iter().cloned());
        Ok(())
    }

    async fn find_by_order_id(
        &self,
        tx: &mut DatabaseTransaction,
        order_id: OrderId,
    ) -> Result<Vec<OrderItem>> {
        Ok(tx
            .working
            .order_items
            .iter()
            .filter(|item| item.order_id() == order_id)
            .cloned()
            .collect())
    }
}
