// Sensitive-field redaction.
//
// Purpose
// - Drop the customer column from every exported row before anything else reads it.
//
// Responsibilities
// - Keep datetime, branch, product description, total price and payment method.
// - Discard rows with fewer than MIN_FIELDS fields and report each one.
// - Ignore trailing fields beyond the payment method.

use crate::modules::sales::core::rows::{CleanedRow, CleanedTable, RawTransactionRow};

/// timestamp, branch, customer, products, total, payment
pub const MIN_FIELDS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedactError {
    #[error(
        "row {index} is malformed: expected at least {min} fields, found {field_count}",
        min = MIN_FIELDS
    )]
    MalformedRow { index: usize, field_count: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redacted {
    pub table: CleanedTable,
    pub rejected: Vec<RedactError>,
}

pub fn redact_row(index: usize, row: &RawTransactionRow) -> Result<CleanedRow, RedactError> {
    match row.as_slice() {
        [datetime, branch, _customer, product_description, total_price, payment_method, ..] => {
            Ok(CleanedRow {
                datetime: datetime.clone(),
                branch: branch.clone(),
                product_description: product_description.clone(),
                total_price: total_price.clone(),
                payment_method: payment_method.clone(),
            })
        }
        _ => Err(RedactError::MalformedRow {
            index,
            field_count: row.len(),
        }),
    }
}

/// Redacts every row. `index` in a rejection is the row's position in `rows`.
pub fn redact_rows(rows: &[RawTransactionRow]) -> Redacted {
    let mut redacted = Redacted::default();
    for (index, row) in rows.iter().enumerate() {
        match redact_row(index, row) {
            Ok(cleaned) => redacted.table.rows.push(cleaned),
            Err(error) => {
                tracing::warn!(%error, "redact: dropping row");
                redacted.rejected.push(error);
            }
        }
    }
    tracing::info!(
        rows = rows.len(),
        kept = redacted.table.len(),
        dropped = redacted.rejected.len(),
        "redact: done"
    );
    redacted
}
