// Ports for the durable store behind the normalized tables.
//
// Purpose
// - IdentityStore: read previously issued ids so repeated runs reuse them.
// - SalesTableWriter: persist emitted records with insert-or-ignore semantics.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - The core only ever reads through IdentityStore, once per table-build phase.

use crate::modules::sales::core::records::{BranchRecord, OrderLineRecord, ProductRecord};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalesStoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Every stored product, in insertion order.
    async fn fetch_existing_products(&self) -> Result<Vec<ProductRecord>, SalesStoreError>;

    /// Every stored branch, in insertion order.
    async fn fetch_existing_branches(&self) -> Result<Vec<BranchRecord>, SalesStoreError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpsertCount {
    pub inserted: usize,
    pub ignored: usize,
}

/// Insert-or-ignore writes. A record whose primary key already exists is left untouched.
///
/// Primary keys: `product_id`, `branch_id`, and `(order_id, product_id)` for order lines.
#[async_trait]
pub trait SalesTableWriter: Send + Sync {
    async fn upsert_products(&self, rows: &[ProductRecord]) -> Result<UpsertCount, SalesStoreError>;
    async fn upsert_branches(&self, rows: &[BranchRecord]) -> Result<UpsertCount, SalesStoreError>;
    async fn upsert_order_lines(
        &self,
        rows: &[OrderLineRecord],
    ) -> Result<UpsertCount, SalesStoreError>;
}

pub mod in_memory;
