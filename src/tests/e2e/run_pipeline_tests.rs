use crate::modules::sales::core::descriptor::parse_descriptor;
use crate::modules::sales::core::records::{NormalizedTables, Size};
use crate::modules::sales::core::rows::RawTransactionRow;
use crate::modules::sales::use_cases::build_product_table::key_policy::ProductKeyPolicy;
use crate::modules::sales::use_cases::load_tables::handler::LoadTablesHandler;
use crate::modules::sales::use_cases::run_pipeline::handler::RunPipelineHandler;
use crate::modules::sales::use_cases::run_pipeline::options::PipelineOptions;
use crate::shared::infrastructure::sales_store::in_memory::InMemorySalesStore;
use crate::tests::fixtures::ids::SequentialIds;
use crate::tests::fixtures::rows::raw_row;
use rstest::{fixture, rstest};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[fixture]
fn export() -> Vec<RawTransactionRow> {
    vec![
        raw_row(&[
            "2023-01-01 10:00",
            "Chesterfield",
            "Jane Doe",
            "Regular Latte - Hazelnut - 2.75, Large Latte - 2.95",
            "5.70",
            "CARD",
        ]),
        raw_row(&[
            "2023-01-01 10:05",
            "Chesterfield",
            "John Roe",
            "Regular Latte - 2.50, Regular Latte - 2.50",
            "5.00",
            "CASH",
        ]),
        raw_row(&["2023-01-01 10:06", "Leeds", "Sam Poe", "Large Latte - 2.95"]),
        raw_row(&["2023-01-01 10:07", "Leeds", "Alex Moe", "Espresso", "1.50", "CARD"]),
        raw_row(&[
            "25/08/2021 09:00",
            "Uppingham",
            "Kim Yoe",
            "large latte - 2.95, Regular hot chocolate - 2.20, Regular latte - HAZELNUT - 2.75",
            "7.90",
            "CARD",
            "4111111111111111",
        ]),
    ]
}

fn order_groups(tables: &NormalizedTables) -> Vec<Vec<(String, u32)>> {
    let names: HashMap<_, _> = tables
        .products
        .iter()
        .map(|p| {
            let size = p.size.map(|s| format!("{s} ")).unwrap_or_default();
            let flavour = p.flavour.as_ref().map(|f| format!(" ({f})")).unwrap_or_default();
            (p.product_id, format!("{size}{}{flavour}", p.name))
        })
        .collect();
    let mut groups: Vec<Vec<(String, u32)>> = Vec::new();
    let mut last_order = None;
    for line in &tables.orders {
        if last_order != Some(line.order_id) {
            groups.push(Vec::new());
            last_order = Some(line.order_id);
        }
        if let Some(group) = groups.last_mut() {
            group.push((names[&line.product_id].clone(), line.quantity));
        }
    }
    groups
}

#[rstest]
#[tokio::test]
async fn it_should_normalize_the_worked_examples(export: Vec<RawTransactionRow>) {
    let handler = RunPipelineHandler::store_less(PipelineOptions::default());
    let output = handler
        .handle(&export, &mut SequentialIds::default())
        .await
        .unwrap();

    assert_eq!(
        order_groups(&output.tables),
        vec![
            vec![
                ("Regular Latte (Hazelnut)".to_string(), 1),
                ("Large Latte".to_string(), 1),
            ],
            vec![("Regular Latte".to_string(), 2)],
            vec![
                ("Large Latte".to_string(), 1),
                ("Regular Hot Chocolate".to_string(), 1),
                ("Regular Latte (Hazelnut)".to_string(), 1),
            ],
        ]
    );
    assert_eq!(output.tables.products.len(), 4);
    assert_eq!(output.tables.products[0].size, Some(Size::Regular));
    assert_eq!(output.tables.products[0].flavour.as_deref(), Some("Hazelnut"));
    assert_eq!(output.summary.rows_dropped_malformed, 1);
    assert_eq!(output.summary.items_skipped, 1);
    assert_eq!(output.summary.orders_emitted, 3);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_ids_stable_across_runs_against_the_same_store(
    export: Vec<RawTransactionRow>,
) {
    let store = Arc::new(InMemorySalesStore::new());
    let handler = RunPipelineHandler::store_aware(store.clone(), PipelineOptions::default());
    let loader = LoadTablesHandler::new(store.clone());
    let mut ids = SequentialIds::default();

    let first = handler.handle(&export, &mut ids).await.unwrap();
    loader.handle(&first.tables).await.unwrap();
    let second = handler.handle(&export, &mut ids).await.unwrap();
    let report = loader.handle(&second.tables).await.unwrap();

    assert_eq!(first.tables.products, second.tables.products);
    assert_eq!(first.tables.branches, second.tables.branches);
    assert_eq!(second.summary.products_minted, 0);
    assert_eq!(second.summary.branches_minted, 0);
    assert_eq!(second.summary.products_reused, first.tables.products.len());
    assert_eq!(report.products.inserted, 0);
    assert_eq!(report.branches.inserted, 0);
    assert_eq!(store.products().await.len(), first.tables.products.len());
}

#[rstest]
#[tokio::test]
async fn it_should_mint_only_for_keys_new_to_the_store(export: Vec<RawTransactionRow>) {
    let store = Arc::new(InMemorySalesStore::new());
    let handler = RunPipelineHandler::store_aware(store.clone(), PipelineOptions::default());
    let loader = LoadTablesHandler::new(store.clone());
    let mut ids = SequentialIds::default();

    let first = handler.handle(&export[..2], &mut ids).await.unwrap();
    loader.handle(&first.tables).await.unwrap();
    let second = handler.handle(&export, &mut ids).await.unwrap();

    let known: HashSet<_> = first.tables.products.iter().map(|p| p.product_id).collect();
    assert!(known.iter().all(|id| second.tables.products.iter().any(|p| p.product_id == *id)));
    assert_eq!(second.summary.products_minted, 1);
    assert_eq!(second.summary.branches_minted, 2);
    assert_eq!(second.summary.branches_reused, 1);
}

#[rstest]
#[tokio::test]
async fn it_should_mint_fresh_ids_every_run_without_a_store(export: Vec<RawTransactionRow>) {
    let handler = RunPipelineHandler::store_less(PipelineOptions::default());
    let mut ids = SequentialIds::default();
    let first = handler.handle(&export, &mut ids).await.unwrap();
    let second = handler.handle(&export, &mut ids).await.unwrap();
    let first_ids: HashSet<_> = first.tables.products.iter().map(|p| p.product_id).collect();
    assert!(second.tables.products.iter().all(|p| !first_ids.contains(&p.product_id)));
}

#[rstest]
#[tokio::test]
async fn it_should_conserve_quantities_and_references(export: Vec<RawTransactionRow>) {
    let options = PipelineOptions {
        product_key_policy: ProductKeyPolicy::NameSizeFlavourPrice,
        ..PipelineOptions::default()
    };
    let output = RunPipelineHandler::store_less(options)
        .handle(&export, &mut SequentialIds::default())
        .await
        .unwrap();
    let tables = &output.tables;

    let product_ids: HashSet<_> = tables.products.iter().map(|p| p.product_id).collect();
    let branch_ids: HashSet<_> = tables.branches.iter().map(|b| b.branch_id).collect();
    assert!(tables.orders.iter().all(|l| product_ids.contains(&l.product_id)));
    assert!(tables.orders.iter().all(|l| branch_ids.contains(&l.branch_id)));

    let emitted_items: u32 = tables.orders.iter().map(|l| l.quantity).sum();
    let parsed_items = export
        .iter()
        .filter(|row| row.len() >= 6)
        .flat_map(|row| parse_descriptor(&row[3]))
        .filter(Result::is_ok)
        .count();
    assert_eq!(emitted_items as usize, parsed_items);

    let mut pairs = HashSet::new();
    assert!(tables.orders.iter().all(|l| pairs.insert((l.order_id, l.product_id))));
}
