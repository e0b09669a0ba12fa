// Normalized table rows produced by a run.
//
// Boundaries
// - Plain data. No input or output, no id minting.
// - Every record is insertable with insert-or-ignore semantics keyed on its primary id.

use crate::shared::core::primitives::{BranchId, OrderId, ProductId};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Regular,
    Large,
}

impl Size {
    /// Matches an already title-cased size token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Regular" => Some(Size::Regular),
            "Large" => Some(Size::Large),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Regular => f.write_str("Regular"),
            Size::Large => f.write_str("Large"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub size: Option<Size>,
    pub name: String,
    pub flavour: Option<String>,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub branch_id: BranchId,
    pub branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub order_id: OrderId,
    pub branch_id: BranchId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub order_time: NaiveDateTime,
    pub total_price: Decimal,
    pub payment_method: String,
}

/// The three output tables of a run, each in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedTables {
    pub products: Vec<ProductRecord>,
    pub branches: Vec<BranchRecord>,
    pub orders: Vec<OrderLineRecord>,
}
