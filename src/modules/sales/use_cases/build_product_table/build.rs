// Product catalog builder.
//
// Responsibilities
// - Parse every cleaned row's product description, in row order then item order.
// - Key each parsed item with the active ProductKeyPolicy.
// - Emit one ProductRecord per distinct key, first occurrence wins, reusing issued ids.
// - A reused id is emitted with its stored record unchanged.
// - Skip unparseable items and count them; never emit a product without a name or price.

use crate::modules::sales::core::descriptor::{ParsedLineItem, parse_descriptor};
use crate::modules::sales::core::identity::{IdentityResolver, Resolution};
use crate::modules::sales::core::records::ProductRecord;
use crate::modules::sales::core::rows::CleanedRow;
use crate::modules::sales::use_cases::build_product_table::key_policy::{
    ProductKey, ProductKeyPolicy,
};
use crate::shared::core::primitives::{IdGenerator, ProductId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ProductTable {
    pub policy: ProductKeyPolicy,
    pub records: Vec<ProductRecord>,
    pub minted: usize,
    pub reused: usize,
    pub items_skipped: usize,
    lookup: HashMap<ProductKey, ProductId>,
}

impl ProductTable {
    pub fn resolve(&self, item: &ParsedLineItem) -> Option<ProductId> {
        self.lookup.get(&self.policy.key_for_item(item)).copied()
    }
}

/// `existing` is the store's product list in store-aware mode, `None` in store-less mode.
pub fn build_product_table(
    rows: &[CleanedRow],
    policy: ProductKeyPolicy,
    existing: Option<&[ProductRecord]>,
    ids: &mut impl IdGenerator,
) -> ProductTable {
    let mut resolver = match existing {
        Some(records) => IdentityResolver::store_aware(
            records
                .iter()
                .map(|record| (policy.key_for_record(record), record.product_id)),
        ),
        None => IdentityResolver::store_less(),
    };
    let stored: HashMap<ProductId, &ProductRecord> = existing
        .unwrap_or_default()
        .iter()
        .map(|record| (record.product_id, record))
        .collect();

    let mut records = Vec::new();
    let (mut minted, mut reused, mut items_skipped) = (0, 0, 0);

    for (row_index, row) in rows.iter().enumerate() {
        for parsed in parse_descriptor(&row.product_description) {
            let item = match parsed {
                Ok(item) => item,
                Err(error) => {
                    tracing::warn!(row_index, %error, "products: skipping item");
                    items_skipped += 1;
                    continue;
                }
            };
            let key = policy.key_for_item(&item);
            let resolution = resolver.resolve(&key, || ProductId(ids.next_id()));
            match resolution {
                Resolution::Minted(id) => {
                    tracing::debug!(product_id = %id, name = %item.name, "products: minted id");
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
                records.push(reused_record.unwrap_or_else(|| ProductRecord {
                    product_id: resolution.id(),
                    size: item.size,
                    name: item.name,
                    flavour: item.flavour,
                    price: item.price,
                }));
            }
        }
    }

    tracing::info!(
        products = records.len(),
        minted,
        reused,
        items_skipped,
        "products: table built"
    );

    ProductTable {
        policy,
        records,
        minted,
        reused,
        items_skipped,
        lookup: resolver.into_resolved(),
    }
}
