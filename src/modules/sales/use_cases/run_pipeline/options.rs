use crate::modules::sales::use_cases::build_product_table::key_policy::ProductKeyPolicy;
use serde::{Deserialize, Serialize};

/// Order time layouts tried in order. The first is the point-of-sale export layout.
pub const DEFAULT_ORDER_TIME_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub product_key_policy: ProductKeyPolicy,
    pub order_time_formats: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            product_key_policy: ProductKeyPolicy::default(),
            order_time_formats: DEFAULT_ORDER_TIME_FORMATS.map(String::from).to_vec(),
        }
    }
}
