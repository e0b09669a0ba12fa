// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Extract raw rows from the CSV export.
// - Wire the identity store into the pipeline, run it, and load the tables.
// - Print the tables, run summary and load report as JSON on stdout.

mod config;
mod csv_source;

use crate::config::{EtlConfig, StoreMode};
use sales_etl::modules::sales::use_cases::load_tables::handler::{LoadReport, LoadTablesHandler};
use sales_etl::modules::sales::use_cases::run_pipeline::handler::{
    PipelineOutput, RunPipelineHandler,
};
use sales_etl::shared::core::primitives::UuidV7Generator;
use sales_etl::shared::infrastructure::sales_store::in_memory::InMemorySalesStore;
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Serialize)]
struct RunReport {
    #[serde(flatten)]
    output: PipelineOutput,
    load: Option<LoadReport>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = EtlConfig::from_env()?;
    tracing::info!(input = %config.input.display(), store = ?config.store, "sales_etl: starting");

    let rows = csv_source::read_rows(&config.input, config.input_has_header)?;
    let mut ids = UuidV7Generator;

    let report = match config.store {
        StoreMode::Memory => {
            let store = Arc::new(InMemorySalesStore::new());
            let handler = RunPipelineHandler::store_aware(store.clone(), config.pipeline);
            let output = handler.handle(&rows, &mut ids).await?;
            let load = LoadTablesHandler::new(store).handle(&output.tables).await?;
            RunReport {
                output,
                load: Some(load),
            }
        }
        StoreMode::None => {
            let handler = RunPipelineHandler::store_less(config.pipeline);
            RunReport {
                output: handler.handle(&rows, &mut ids).await?,
                load: None,
            }
        }
    };

    tracing::info!(summary = ?report.output.summary, "sales_etl: done");
    serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
    println!();
    Ok(())
}
