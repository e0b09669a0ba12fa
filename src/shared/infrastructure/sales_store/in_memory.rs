// In memory implementation of the IdentityStore and SalesTableWriter ports.
//
// Purpose
// - Run the pipeline end to end, repeatedly, without a database.
//
// Responsibilities
// - Keep each table in insertion order with a primary key index.
// - Ignore writes whose primary key already exists.

use crate::modules::sales::core::records::{BranchRecord, OrderLineRecord, ProductRecord};
use crate::shared::core::primitives::{BranchId, OrderId, ProductId};
use crate::shared::infrastructure::sales_store::{
    IdentityStore, SalesStoreError, SalesTableWriter, UpsertCount,
};
use std::collections::HashSet;
use std::hash::Hash;
use tokio::sync::RwLock;

#[derive(Debug)]
struct KeyedTable<K, R> {
    keys: HashSet<K>,
    rows: Vec<R>,
}

impl<K, R> Default for KeyedTable<K, R> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
            rows: Vec::new(),
        }
    }
}

impl<K: Eq + Hash, R: Clone> KeyedTable<K, R> {
    fn insert_or_ignore(&mut self, rows: &[R], key_of: impl Fn(&R) -> K) -> UpsertCount {
        let mut count = UpsertCount::default();
        for row in rows {
            if self.keys.insert(key_of(row)) {
                self.rows.push(row.clone());
                count.inserted += 1;
            } else {
                count.ignored += 1;
            }
        }
        count
    }
}

#[derive(Debug, Default)]
pub struct InMemorySalesStore {
    products: RwLock<KeyedTable<ProductId, ProductRecord>>,
    branches: RwLock<KeyedTable<BranchId, BranchRecord>>,
    order_lines: RwLock<KeyedTable<(OrderId, ProductId), OrderLineRecord>>,
    is_offline: bool,
}

impl InMemorySalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SalesStoreError> {
        if self.is_offline {
            return Err(SalesStoreError::Unavailable("Sales store offline".into()));
        }
        Ok(())
    }

    pub async fn products(&self) -> Vec<ProductRecord> {
        self.products.read().await.rows.clone()
    }

    pub async fn branches(&self) -> Vec<BranchRecord> {
        self.branches.read().await.rows.clone()
    }

    pub async fn order_lines(&self) -> Vec<OrderLineRecord> {
        self.order_lines.read().await.rows.clone()
    }
}

#[async_trait::async_trait]
impl IdentityStore for InMemorySalesStore {
    async fn fetch_existing_products(&self) -> Result<Vec<ProductRecord>, SalesStoreError> {
        self.ensure_online()?;
        Ok(self.products().await)
    }

    async fn fetch_existing_branches(&self) -> Result<Vec<BranchRecord>, SalesStoreError> {
        self.ensure_online()?;
        Ok(self.branches().await)
    }
}

#[async_trait::async_trait]
impl SalesTableWriter for InMemorySalesStore {
    async fn upsert_products(
        &self,
        rows: &[ProductRecord],
    ) -> Result<UpsertCount, SalesStoreError> {
        self.ensure_online()?;
        let mut table = self.products.write().await;
        Ok(table.insert_or_ignore(rows, |row| row.product_id))
    }

    async fn upsert_branches(&self, rows: &[BranchRecord]) -> Result<UpsertCount, SalesStoreError> {
        self.ensure_online()?;
        let mut table = self.branches.write().await;
        Ok(table.insert_or_ignore(rows, |row| row.branch_id))
    }

    async fn upsert_order_lines(
        &self,
        rows: &[OrderLineRecord],
    ) -> Result<UpsertCount, SalesStoreError> {
        self.ensure_online()?;
        let mut table = self.order_lines.write().await;
        Ok(table.insert_or_ignore(rows, |row| (row.order_id, row.product_id)))
    }
}
