/// One exported point-of-sale row, already split into fields.
pub type RawTransactionRow = Vec<String>;

/// Column names of the redacted table, in field order.
pub const CLEANED_HEADER: [&str; 5] = [
    "datetime",
    "branch",
    "product",
    "total_price",
    "payment_method",
];

/// A transaction row with the customer column removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRow {
    pub datetime: String,
    pub branch: String,
    pub product_description: String,
    pub total_price: String,
    pub payment_method: String,
}

impl CleanedRow {
    /// Fields in `CLEANED_HEADER` order.
    #[cfg(test)]
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.datetime,
            &self.branch,
            &self.product_description,
            &self.total_price,
            &self.payment_method,
        ]
    }
}

/// Output of the redactor. The header is implied by `CLEANED_HEADER`, so `rows` holds data only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedTable {
    pub rows: Vec<CleanedRow>,
}

impl CleanedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
