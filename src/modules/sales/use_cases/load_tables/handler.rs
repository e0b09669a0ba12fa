// Load tables handler persists the output of a run.
//
// Responsibilities
// - Write branches and products before the order lines that reference them.
// - Rely on insert-or-ignore, so loading the same tables twice changes nothing.
// - Stop at the first failing table; earlier tables stay written.

use crate::modules::sales::core::records::NormalizedTables;
use crate::shared::infrastructure::sales_store::{SalesStoreError, SalesTableWriter, UpsertCount};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub branches: UpsertCount,
    pub products: UpsertCount,
    pub order_lines: UpsertCount,
}

pub struct LoadTablesHandler<TWriter>
where
    TWriter: SalesTableWriter + 'static,
{
    writer: Arc<TWriter>,
}

impl<TWriter> LoadTablesHandler<TWriter>
where
    TWriter: SalesTableWriter + 'static,
{
    pub fn new(writer: Arc<TWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, tables: &NormalizedTables) -> Result<LoadReport, SalesStoreError> {
        let branches = self.writer.upsert_branches(&tables.branches).await?;
        tracing::info!(inserted = branches.inserted, ignored = branches.ignored, "load: branches");
        let products = self.writer.upsert_products(&tables.products).await?;
        tracing::info!(inserted = products.inserted, ignored = products.ignored, "load: products");
        let order_lines = self.writer.upsert_order_lines(&tables.orders).await?;
        tracing::info!(
            inserted = order_lines.inserted,
            ignored = order_lines.ignored,
            "load: order lines"
        );
        Ok(LoadReport {
            branches,
            products,
            order_lines,
        })
    }
}
