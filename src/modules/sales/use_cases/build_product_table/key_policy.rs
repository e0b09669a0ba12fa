// Which attributes identify a product.
//
// A price change is either the same product (NameSizeFlavour) or a new one
// (NameSizeFlavourPrice). Both builders and the order normalizer must use the same policy
// within a run, otherwise order items stop resolving.

use crate::modules::sales::core::descriptor::ParsedLineItem;
use crate::modules::sales::core::records::{ProductRecord, Size};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKeyPolicy {
    #[default]
    NameSizeFlavour,
    NameSizeFlavourPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey {
    pub name: String,
    pub size: Option<Size>,
    pub flavour: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductKeyPolicy {
    fn key(
        &self,
        name: &str,
        size: Option<Size>,
        flavour: Option<&str>,
        price: Decimal,
    ) -> ProductKey {
        ProductKey {
            name: name.to_string(),
            size,
            flavour: flavour.map(str::to_string),
            price: match self {
                ProductKeyPolicy::NameSizeFlavour => None,
                // Normalized so 2.5 and 2.50 are one product.
                ProductKeyPolicy::NameSizeFlavourPrice => Some(price.normalize()),
            },
        }
    }

    pub fn key_for_item(&self, item: &ParsedLineItem) -> ProductKey {
        self.key(&item.name, item.size, item.flavour.as_deref(), item.price)
    }

    pub fn key_for_record(&self, record: &ProductRecord) -> ProductKey {
        self.key(
            &record.name,
            record.size,
            record.flavour.as_deref(),
            record.price,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product key policy {0:?}, expected name_size_flavour or name_size_flavour_price")]
pub struct UnknownKeyPolicy(pub String);

impl FromStr for ProductKeyPolicy {
    type Err = UnknownKeyPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name_size_flavour" => Ok(ProductKeyPolicy::NameSizeFlavour),
            "name_size_flavour_price" => Ok(ProductKeyPolicy::NameSizeFlavourPrice),
            _ => Err(UnknownKeyPolicy(value.to_string())),
        }
    }
}
