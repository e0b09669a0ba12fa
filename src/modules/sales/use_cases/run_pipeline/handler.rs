// Run pipeline handler orchestrates one transformation run.
//
// Responsibilities
// - Redact the raw rows.
// - Read previously issued ids from the identity store, once per table, when one is wired.
// - Build the product and branch tables, then normalize orders against them.
// - Return the three tables together with the run summary.
//
// Boundaries
// - Nothing runs until `handle` is called. The handler never writes to the store.
// - Only an unreachable identity store fails a run; row and item problems are counted.

use crate::modules::sales::core::records::NormalizedTables;
use crate::modules::sales::core::rows::RawTransactionRow;
use crate::modules::sales::core::summary::RunSummary;
use crate::modules::sales::use_cases::build_branch_table::build::build_branch_table;
use crate::modules::sales::use_cases::build_product_table::build::build_product_table;
use crate::modules::sales::use_cases::normalize_orders::normalize::normalize_orders;
use crate::modules::sales::use_cases::redact_rows::redact::redact_rows;
use crate::modules::sales::use_cases::run_pipeline::options::PipelineOptions;
use crate::shared::core::primitives::IdGenerator;
use crate::shared::infrastructure::sales_store::{IdentityStore, SalesStoreError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("identity store unavailable: {0}")]
    StoreUnavailable(#[source] SalesStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub tables: NormalizedTables,
    pub summary: RunSummary,
}

pub struct RunPipelineHandler {
    identity_store: Option<Arc<dyn IdentityStore>>,
    options: PipelineOptions,
}

impl RunPipelineHandler {
    /// Reuses ids issued by earlier runs against `identity_store`.
    pub fn store_aware(identity_store: Arc<dyn IdentityStore>, options: PipelineOptions) -> Self {
        Self {
            identity_store: Some(identity_store),
            options,
        }
    }

    /// Mints fresh ids for every distinct key in each run.
    pub fn store_less(options: PipelineOptions) -> Self {
        Self {
            identity_store: None,
            options,
        }
    }

    pub async fn handle(
        &self,
        rows: &[RawTransactionRow],
        ids: &mut impl IdGenerator,
    ) -> Result<PipelineOutput, PipelineError> {
        tracing::info!(
            rows = rows.len(),
            store_aware = self.identity_store.is_some(),
            policy = ?self.options.product_key_policy,
            "pipeline: starting"
        );
        let redacted = redact_rows(rows);
        let cleaned = &redacted.table.rows;

        let existing_products = match &self.identity_store {
            Some(store) => Some(
                store
                    .fetch_existing_products()
                    .await
                    .map_err(PipelineError::StoreUnavailable)?,
            ),
            None => None,
        };
        let products = build_product_table(
            cleaned,
            self.options.product_key_policy,
            existing_products.as_deref(),
            ids,
        );

        let existing_branches = match &self.identity_store {
            Some(store) => Some(
                store
                    .fetch_existing_branches()
                    .await
                    .map_err(PipelineError::StoreUnavailable)?,
            ),
            None => None,
        };
        let branches = build_branch_table(cleaned, existing_branches.as_deref(), ids);

        let orders = normalize_orders(
            cleaned,
            &products,
            &branches,
            &self.options.order_time_formats,
            ids,
        );

        let summary = RunSummary {
            rows_loaded: rows.len(),
            rows_dropped_malformed: redacted.rejected.len(),
            items_skipped: products.items_skipped,
            rows_without_branch: branches.rows_without_branch,
            orders_dropped_unresolved_branch: orders.orders_dropped_unresolved_branch,
            orders_dropped_invalid_fields: orders.orders_dropped_invalid_fields,
            items_unresolved: orders.items_unresolved,
            products_minted: products.minted,
            products_reused: products.reused,
            branches_minted: branches.minted,
            branches_reused: branches.reused,
            products_emitted: products.records.len(),
            branches_emitted: branches.records.len(),
            orders_emitted: orders.orders_emitted,
            order_lines_emitted: orders.lines.len(),
        };
        tracing::info!(?summary, "pipeline: done");

        Ok(PipelineOutput {
            tables: NormalizedTables {
                products: products.records,
                branches: branches.records,
                orders: orders.lines,
            },
            summary,
        })
    }
}
