use crate::modules::sales::core::records::{BranchRecord, OrderLineRecord, ProductRecord, Size};
use crate::shared::core::primitives::{BranchId, OrderId, ProductId};
use chrono::NaiveDateTime;
use uuid::Uuid;

pub fn product_record(id: u128, name: &str, price: &str) -> ProductRecord {
    ProductRecord {
        product_id: ProductId(Uuid::from_u128(id)),
        size: Some(Size::Regular),
        name: name.to_string(),
        flavour: None,
        price: price.parse().unwrap(),
    }
}

pub fn branch_record(id: u128, branch_name: &str) -> BranchRecord {
    BranchRecord {
        branch_id: BranchId(Uuid::from_u128(id)),
        branch_name: branch_name.to_string(),
    }
}

pub fn order_line_record(
    order: u128,
    branch: u128,
    product: u128,
    quantity: u32,
) -> OrderLineRecord {
    OrderLineRecord {
        order_id: OrderId(Uuid::from_u128(order)),
        branch_id: BranchId(Uuid::from_u128(branch)),
        product_id: ProductId(Uuid::from_u128(product)),
        quantity,
        order_time: NaiveDateTime::parse_from_str("2021-08-25 09:00", "%Y-%m-%d %H:%M").unwrap(),
        total_price: "4.75".parse().unwrap(),
        payment_method: "CARD".to_string(),
    }
}
