// Order normalization.
//
// Purpose
// - Expand each cleaned transaction row into one line per distinct product in it.
//
// Responsibilities
// - Resolve the branch; a row with an unknown branch is dropped whole.
// - Parse the order time and total price; a row where either fails is dropped whole.
// - Re-parse the row's own product description and resolve every item against the product
//   table; an unknown item is dropped alone.
// - Count repeats per product, keeping first-appearance order, and emit quantity = count.
// - Mint an order id only for rows with at least one resolved item.
//
// Boundaries
// - Each row is handled independently. No parse state is shared across rows.

use crate::modules::sales::core::descriptor::{ParsedLineItem, parse_descriptor};
use crate::modules::sales::core::records::OrderLineRecord;
use crate::modules::sales::core::rows::CleanedRow;
use crate::modules::sales::use_cases::build_branch_table::build::BranchTable;
use crate::modules::sales::use_cases::build_product_table::build::ProductTable;
use crate::shared::core::primitives::{IdGenerator, OrderId, ProductId};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedReference {
    #[error("unknown branch {branch_name:?}")]
    Branch { branch_name: String },

    #[error("unknown product {item:?}")]
    Product { item: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderRowError {
    #[error(transparent)]
    Unresolved(#[from] UnresolvedReference),

    #[error("unparseable order time {0:?}")]
    InvalidOrderTime(String),

    #[error("unparseable total price {0:?}")]
    InvalidTotalPrice(String),
}

/// Lines for one row plus the items of that row that did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedOrder {
    pub lines: Vec<OrderLineRecord>,
    pub unresolved: Vec<UnresolvedReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedOrders {
    pub lines: Vec<OrderLineRecord>,
    pub orders_emitted: usize,
    pub orders_dropped_unresolved_branch: usize,
    pub orders_dropped_invalid_fields: usize,
    pub items_unresolved: usize,
}

pub fn parse_order_time(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn describe(item: &ParsedLineItem) -> String {
    let mut out = match item.size {
        Some(size) => format!("{size} {}", item.name),
        None => item.name.clone(),
    };
    if let Some(flavour) = &item.flavour {
        out.push_str(" - ");
        out.push_str(flavour);
    }
    out
}

pub fn normalize_order(
    row: &CleanedRow,
    products: &ProductTable,
    branches: &BranchTable,
    order_time_formats: &[String],
    ids: &mut impl IdGenerator,
) -> Result<NormalizedOrder, OrderRowError> {
    let branch_id = branches
        .resolve(&row.branch)
        .ok_or_else(|| UnresolvedReference::Branch {
            branch_name: row.branch.clone(),
        })?;
    let order_time = parse_order_time(&row.datetime, order_time_formats)
        .ok_or_else(|| OrderRowError::InvalidOrderTime(row.datetime.clone()))?;
    let total_price = Decimal::from_str(row.total_price.trim())
        .map_err(|_| OrderRowError::InvalidTotalPrice(row.total_price.clone()))?;

    let mut order = NormalizedOrder::default();
    let mut counts: Vec<(ProductId, u32)> = Vec::new();

    // Parse failures were already reported while building the product table.
    for item in parse_descriptor(&row.product_description).into_iter().flatten() {
        match products.resolve(&item) {
            Some(product_id) => match counts.iter_mut().find(|(id, _)| *id == product_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((product_id, 1)),
            },
            None => order.unresolved.push(UnresolvedReference::Product {
                item: describe(&item),
            }),
        }
    }

    if counts.is_empty() {
        return Ok(order);
    }

    let order_id = OrderId(ids.next_id());
    order.lines = counts
        .into_iter()
        .map(|(product_id, quantity)| OrderLineRecord {
            order_id,
            branch_id,
            product_id,
            quantity,
            order_time,
            total_price,
            payment_method: row.payment_method.trim().to_string(),
        })
        .collect();
    Ok(order)
}

pub fn normalize_orders(
    rows: &[CleanedRow],
    products: &ProductTable,
    branches: &BranchTable,
    order_time_formats: &[String],
    ids: &mut impl IdGenerator,
) -> NormalizedOrders {
    let mut normalized = NormalizedOrders::default();

    for (row_index, row) in rows.iter().enumerate() {
        match normalize_order(row, products, branches, order_time_formats, ids) {
            Ok(order) => {
                for reference in &order.unresolved {
                    tracing::warn!(row_index, error = %reference, "orders: dropping item");
                }
                normalized.items_unresolved += order.unresolved.len();
                if !order.lines.is_empty() {
                    normalized.orders_emitted += 1;
                    normalized.lines.extend(order.lines);
                }
            }
            Err(error) => {
                tracing::warn!(row_index, %error, "orders: dropping row");
                match error {
                    OrderRowError::Unresolved(_) => {
                        normalized.orders_dropped_unresolved_branch += 1
                    }
                    OrderRowError::InvalidOrderTime(_) | OrderRowError::InvalidTotalPrice(_) => {
                        normalized.orders_dropped_invalid_fields += 1
                    }
                }
            }
        }
    }

    tracing::info!(
        orders = normalized.orders_emitted,
        lines = normalized.lines.len(),
        dropped_unresolved_branch = normalized.orders_dropped_unresolved_branch,
        dropped_invalid_fields = normalized.orders_dropped_invalid_fields,
        items_unresolved = normalized.items_unresolved,
        "orders: normalized"
    );
    normalized
}
