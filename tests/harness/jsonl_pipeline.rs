//! Pipeline runs against a JSONL store.

use std::sync::Arc;
use stress_core::{KnowledgeStore, NoopObserver, StoredDocument};
use stress_framework::{
    HarnessConfig, HarnessError, HarnessOutcome, HarnessPipeline, HealthStatus, StageSelection,
    StoreConfig,
};
use stress_store::JsonlStore;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

const SEED: u64 = 42;
const RECORDS: u64 = 120;
const BATCH_SIZE: usize = 25;

fn config(path: std::path::PathBuf) -> HarnessConfig {
    HarnessConfig::new()
        .with_records(RECORDS)
        .with_batch_size(BATCH_SIZE)
        .with_test_queries(8)
        .with_seed(Some(SEED))
        .with_store(StoreConfig::Jsonl { path })
}

#[test]
fn test_load_then_check_jsonl_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("papers.jsonl");

    let config = config(path.clone());
    let mut store = config.store.open();
    let report = HarnessPipeline::new(config)
        .with_observer(Arc::new(NoopObserver))
        .run(store.as_mut(), &CancellationToken::new())
        .unwrap();

    let loader = report.loader().unwrap();
    assert_eq!(loader.success_count, RECORDS);
    assert_eq!(loader.batches.len(), 5);
    assert_eq!(loader.batches[4].requested_size, 20);

    let integrity = report.integrity().unwrap();
    assert_eq!(integrity.total_records, RECORDS);
    assert_eq!(integrity.missing_field_count, 0);
    assert_eq!(integrity.invalid_citation_count, 0);
    assert_eq!(report.status(), HealthStatus::Healthy);

    // A second, read-only run sees what the first one wrote.
    let checks = HarnessConfig::new()
        .with_stages(StageSelection::checks_only())
        .with_store(StoreConfig::Jsonl { path: path.clone() });
    let mut store = JsonlStore::new(&path);
    let second = HarnessPipeline::new(checks)
        .with_observer(Arc::new(NoopObserver))
        .run(&mut store, &CancellationToken::new())
        .unwrap();

    assert_eq!(second.connectivity().unwrap().record_count, Some(RECORDS));
    assert!(second.loader().is_none());
    assert_eq!(store.load().unwrap().len() as u64, RECORDS);
}

#[test]
fn test_damaged_records_lower_integrity() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("papers.jsonl");
    let mut store = JsonlStore::new(&path);

    let mut generator = stress_generator::RecordGenerator::new(Some(SEED));
    for record in generator.generate_batch(18) {
        store.write(record).unwrap();
    }
    store
        .append_document(&StoredDocument {
            id: "untitled".to_string(),
            ..Default::default()
        })
        .unwrap();
    store
        .append_document(&StoredDocument {
            id: "negative".to_string(),
            title: Some("Negative citations".to_string()),
            authors: vec!["Smith, J.".to_string()],
            abstract_text: Some("A record with a broken citation count.".to_string()),
            category: Some("cs.AI".to_string()),
            field: Some("Robotics".to_string()),
            citation_count: -3,
            ..Default::default()
        })
        .unwrap();

    let report = HarnessPipeline::new(
        config(path).with_stages(StageSelection {
            load: false,
            probe: false,
            audit: true,
        }),
    )
    .with_observer(Arc::new(NoopObserver))
    .run(&mut store, &CancellationToken::new())
    .unwrap();

    let integrity = report.integrity().unwrap();
    assert_eq!(integrity.total_records, 20);
    assert_eq!(integrity.missing_field_count, 1);
    assert_eq!(integrity.invalid_citation_count, 1);
    assert!(integrity.integrity_score < 100.0);
}

#[test]
fn test_missing_directory_is_unreachable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent").join("papers.jsonl");

    let config = config(path);
    let mut store = config.store.open();
    let error = HarnessPipeline::new(config)
        .with_observer(Arc::new(NoopObserver))
        .run(store.as_mut(), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(error, HarnessError::Connectivity(_)));
    assert_eq!(HarnessOutcome::from_error(&error).exit_code(), 1);
}
