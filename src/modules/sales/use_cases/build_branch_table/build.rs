// Branch catalog builder.
//
// Responsibilities
// - Key branches by their trimmed display name, with no other normalization.
// - Emit one BranchRecord per distinct name, first occurrence wins, reusing issued ids.
// - A reused id is emitted with its stored record unchanged.
// - Skip rows whose branch name is blank.

use crate::modules::sales::core::identity::{IdentityResolver, Resolution};
use crate::modules::sales::core::records::BranchRecord;
use crate::modules::sales::core::rows::CleanedRow;
use crate::shared::core::primitives::{BranchId, IdGenerator};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct BranchTable {
    pub records: Vec<BranchRecord>,
    pub minted: usize,
    pub reused: usize,
    pub rows_without_branch: usize,
    lookup: HashMap<String, BranchId>,
}

impl BranchTable {
    pub fn resolve(&self, branch_name: &str) -> Option<BranchId> {
        self.lookup.get(branch_name.trim()).copied()
    }
}

/// `existing` is the store's branch list in store-aware mode, `None` in store-less mode.
pub fn build_branch_table(
    rows: &[CleanedRow],
    existing: Option<&[BranchRecord]>,
    ids: &mut impl IdGenerator,
) -> BranchTable {
    let mut resolver = match existing {
        Some(records) => IdentityResolver::store_aware(
            records
                .iter()
                .map(|record| (record.branch_name.trim().to_string(), record.branch_id)),
        ),
        None => IdentityResolver::store_less(),
    };
    let stored: HashMap<BranchId, &BranchRecord> = existing
        .unwrap_or_default()
        .iter()
        .map(|record| (record.branch_id, record))
        .collect();

    let mut records = Vec::new();
    let (mut minted, mut reused, mut rows_without_branch) = (0, 0, 0);

    for (row_index, row) in rows.iter().enumerate() {
        let branch_name = row.branch.trim();
        if branch_name.is_empty() {
            tracing::warn!(row_index, "branches: row has no branch name");
            rows_without_branch += 1;
            continue;
        }
        let resolution = resolver.resolve(&branch_name.to_string(), || BranchId(ids.next_id()));
        match resolution {
            Resolution::Minted(id) => {
                tracing::debug!(branch_id = %id, branch_name, "branches: minted id");
                minted += 1;
            }
            Resolution::Reused(_) => reused += 1,
            Resolution::Seen(_) => {}
        }
        if resolution.is_first_occurrence() {
            let reused_record = match resolution {
                Resolution::Reused(id) => stored.get(&id).map(|record| (*record).clone()),
                _ => None,
            };
            records.push(reused_record.unwrap_or_else(|| BranchRecord {
                branch_id: resolution.id(),
                branch_name: branch_name.to_string(),
            }));
        }
    }

    tracing::info!(
        branches = records.len(),
        minted,
        reused,
        rows_without_branch,
        "branches: table built"
    );

    BranchTable {
        records,
        minted,
        reused,
        rows_without_branch,
        lookup: resolver.into_resolved(),
    }
}
