use serde::Serialize;

/// Counts reported at the end of a run.
///
/// A row with a blank branch is counted twice: in `rows_without_branch` by the branch builder
/// and in `orders_dropped_unresolved_branch` when its order is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_dropped_malformed: usize,
    pub items_skipped: usize,
    pub rows_without_branch: usize,
    pub orders_dropped_unresolved_branch: usize,
    pub orders_dropped_invalid_fields: usize,
    pub items_unresolved: usize,
    pub products_minted: usize,
    pub products_reused: usize,
    pub branches_minted: usize,
    pub branches_reused: usize,
    pub products_emitted: usize,
    pub branches_emitted: usize,
    pub orders_emitted: usize,
    pub order_lines_emitted: usize,
}

impl RunSummary {
    /// Rows rejected outright, by the redactor or by the order normalizer.
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped_malformed
            + self.orders_dropped_unresolved_branch
            + self.orders_dropped_invalid_fields
    }
}
