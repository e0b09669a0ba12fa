// Product description grammar.
//
// Purpose
// - Decode the free-text product list of one transaction into line items.
//
// Grammar
// - Items are separated by `,`.
// - Each item is `<size_type> - <flavour> - <price>` or `<size_type> - <price>`.
// - `<size_type>` optionally starts with `Regular` or `Large`.
//
// Boundaries
// - Pure and per row. Callers that need the items of a row parse that row; there is no
//   shared parse state between rows.
// - Failures are per item. One bad item never hides the others in the same row.

use crate::modules::sales::core::records::Size;
use crate::modules::sales::core::text::{normalize_optional, normalize_text};
use rust_decimal::Decimal;
use std::str::FromStr;

const ITEM_SEPARATOR: char = ',';
const PART_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLineItem {
    pub size: Option<Size>,
    pub name: String,
    pub flavour: Option<String>,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected item shape with {parts} part(s): {segment:?}")]
    UnexpectedShape { segment: String, parts: usize },

    #[error("invalid price {price:?} in item {segment:?}")]
    InvalidPrice { segment: String, price: String },

    #[error("missing product name in item {segment:?}")]
    MissingName { segment: String },
}

/// Parses every item of one description, in written order.
///
/// Blank descriptions and blank segments (`"a, , b"`) produce nothing.
pub fn parse_descriptor(description: &str) -> Vec<Result<ParsedLineItem, ParseError>> {
    description
        .split(ITEM_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_item)
        .collect()
}

/// Parses a single trimmed item segment into a normalized line item.
pub fn parse_item(segment: &str) -> Result<ParsedLineItem, ParseError> {
    let parts: Vec<&str> = segment.split(PART_SEPARATOR).map(str::trim).collect();
    let (size_type, flavour, price) = match parts.as_slice() {
        [size_type, flavour, price] => (*size_type, Some(*flavour), *price),
        [size_type, price] => (*size_type, None, *price),
        _ => {
            return Err(ParseError::UnexpectedShape {
                segment: segment.to_string(),
                parts: parts.len(),
            });
        }
    };

    let price = Decimal::from_str(price).map_err(|_| ParseError::InvalidPrice {
        segment: segment.to_string(),
        price: price.to_string(),
    })?;

    let (size, name) = split_size(&normalize_text(size_type));
    if name.is_empty() {
        return Err(ParseError::MissingName {
            segment: segment.to_string(),
        });
    }

    Ok(ParsedLineItem {
        size,
        name,
        flavour: normalize_optional(flavour),
        price,
    })
}

// A leading size token only counts when something follows it; a bare "Large" is a name.
fn split_size(size_type: &str) -> (Option<Size>, String) {
    if let Some((token, rest)) = size_type.split_once(char::is_whitespace) {
        let rest = rest.trim();
        if let Some(size) = Size::from_token(token).filter(|_| !rest.is_empty()) {
            return (Some(size), rest.to_string());
        }
    }
    (None, size_type.to_string())
}
