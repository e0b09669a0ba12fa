// Raw row extraction from a point-of-sale CSV export.
//
// Records may have any number of fields; short ones are left for the redactor to reject.
// Blank records are dropped here.

use anyhow::Context;
use sales_etl::modules::sales::core::rows::RawTransactionRow;
use std::io::Read;
use std::path::Path;

pub fn read_rows(path: &Path, has_header: bool) -> anyhow::Result<Vec<RawTransactionRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open input {}", path.display()))?;
    let rows = read_rows_from(file, has_header)
        .with_context(|| format!("cannot read input {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "extract: done");
    Ok(rows)
}

pub fn read_rows_from(
    input: impl Read,
    has_header: bool,
) -> anyhow::Result<Vec<RawTransactionRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(input);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(String::from).collect());
    }
    Ok(rows)
}
