//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use stageview_rs::catalog;
use stageview_rs::store::StageStore;
use stageview_rs::types::{StageDetail, StageRecord};

/// A store seeded from the built-in catalog
pub fn seeded_store() -> StageStore {
    StageStore::from_dataset(catalog::builtin()).expect("built-in catalog is valid")
}

/// Snapshot of (id, record) pairs for structural comparison
pub fn snapshot(store: &StageStore) -> Vec<StageRecord> {
    store.records().iter().map(|r| (**r).clone()).collect()
}

/// Fetch the tuning payload of a configurable stage, panicking otherwise
pub fn tuning_of(record: &StageRecord) -> &stageview_rs::types::Tuning {
    match &record.detail {
        StageDetail::Configurable { tuning, .. } => tuning,
        _ => panic!("stage '{}' is not configurable", record.id),
    }
}
