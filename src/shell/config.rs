// Run configuration read from the environment.
//
// Variables
// - SALES_ETL_INPUT               path of the point-of-sale CSV export (required)
// - SALES_ETL_INPUT_HAS_HEADER    skip the first CSV record (default false)
// - SALES_ETL_PRODUCT_KEY         name_size_flavour | name_size_flavour_price
// - SALES_ETL_ORDER_TIME_FORMATS  `;`-separated chrono formats, tried in order
// - SALES_ETL_STORE               memory | none (default memory)

use anyhow::{Context, bail};
use sales_etl::modules::sales::use_cases::run_pipeline::options::PipelineOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Memory,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlConfig {
    pub input: PathBuf,
    pub input_has_header: bool,
    pub store: StoreMode,
    pub pipeline: PipelineOptions,
}

impl EtlConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let input = lookup("SALES_ETL_INPUT")
            .filter(|v| !v.trim().is_empty())
            .context("SALES_ETL_INPUT must point at a CSV export")?;

        let input_has_header = match lookup("SALES_ETL_INPUT_HAS_HEADER") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("SALES_ETL_INPUT_HAS_HEADER: {value:?}"))?,
            None => false,
        };

        let store = match lookup("SALES_ETL_STORE").as_deref().map(str::trim) {
            None | Some("memory") => StoreMode::Memory,
            Some("none") => StoreMode::None,
            Some(other) => bail!("SALES_ETL_STORE: unknown store {other:?}"),
        };

        let mut pipeline = PipelineOptions::default();
        if let Some(policy) = lookup("SALES_ETL_PRODUCT_KEY") {
            pipeline.product_key_policy = policy.parse()?;
        }
        if let Some(formats) = lookup("SALES_ETL_ORDER_TIME_FORMATS") {
            let formats: Vec<String> = formats
                .split(';')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
            if formats.is_empty() {
                bail!("SALES_ETL_ORDER_TIME_FORMATS is set but empty");
            }
            pipeline.order_time_formats = formats;
        }

        Ok(Self {
            input: PathBuf::from(input.trim()),
            input_has_header,
            store,
            pipeline,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => bail!("expected a boolean"),
    }
}
