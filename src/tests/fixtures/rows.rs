use crate::modules::sales::core::rows::{CleanedRow, RawTransactionRow};
use crate::modules::sales::use_cases::run_pipeline::options::DEFAULT_ORDER_TIME_FORMATS;

pub fn raw_row(fields: &[&str]) -> RawTransactionRow {
    fields.iter().map(|f| f.to_string()).collect()
}

/// A well-formed row at 2023-01-01 10:00, paid by card, totalling 5.70.
pub fn cleaned_row(branch: &str, product_description: &str) -> CleanedRow {
    CleanedRow {
        datetime: "2023-01-01 10:00".to_string(),
        branch: branch.to_string(),
        product_description: product_description.to_string(),
        total_price: "5.70".to_string(),
        payment_method: "CARD".to_string(),
    }
}

pub fn default_time_formats() -> Vec<String> {
    DEFAULT_ORDER_TIME_FORMATS.map(String::from).to_vec()
}
