//! End-to-end workflow tests driven through the action layer
//!
//! These tests validate the same code paths the UI exercises: panels emit
//! `AppAction`s and the app applies them to the store, without any
//! rendering surface involved.

mod common;

use common::{seeded_store, tuning_of};
use stageview_rs::frontend::{apply_store_action, AppAction};
use stageview_rs::types::StageDetail;

#[test]
fn test_open_etl_apply_advanced_then_toggle() {
    let mut store = seeded_store();

    // Open the "etl" stage
    assert!(apply_store_action(
        &mut store,
        &AppAction::SelectStage(Some("etl".to_string()))
    ));
    assert_eq!(store.active_id(), Some("etl"));

    // Click the "Advanced" preset
    assert!(apply_store_action(
        &mut store,
        &AppAction::ApplyPreset {
            stage_id: "etl".to_string(),
            name: "Advanced".to_string(),
        }
    ));

    let etl = store.active().expect("etl is active");
    let tuning = tuning_of(etl);
    let expected: std::collections::BTreeMap<String, u8> = [
        ("freshness", 85),
        ("transform_depth", 80),
        ("validation", 85),
        ("cost_control", 55),
        ("change_handling", 80),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    assert_eq!(tuning.values, expected);
    assert_eq!(tuning.preset, "Advanced");

    // Toggle "Incremental runs" off
    assert!(apply_store_action(
        &mut store,
        &AppAction::ToggleItem {
            stage_id: "etl".to_string(),
            section: "Execution".to_string(),
            key: "incremental".to_string(),
        }
    ));

    let etl = store.active().expect("etl is still active");
    let StageDetail::Configurable {
        tuning, options, ..
    } = &etl.detail
    else {
        panic!("etl must be configurable");
    };

    // Only that item flipped; preset and values are untouched
    let incremental = options[0]
        .items
        .iter()
        .find(|i| i.key == "incremental")
        .unwrap();
    assert!(!incremental.enabled);
    for item in options[0].items.iter().filter(|i| i.key != "incremental") {
        let seeded = seeded_store();
        let seed_etl = seeded.records().iter().find(|r| r.id == "etl").unwrap();
        let StageDetail::Configurable {
            options: seed_options,
            ..
        } = &seed_etl.detail
        else {
            unreachable!();
        };
        let seed_item = seed_options[0]
            .items
            .iter()
            .find(|i| i.key == item.key)
            .unwrap();
        assert_eq!(item.enabled, seed_item.enabled);
    }
    assert_eq!(tuning.preset, "Advanced");
    assert_eq!(tuning.values, expected);
}

#[test]
fn test_blueprint_growth_and_model_selection() {
    let mut store = seeded_store();

    apply_store_action(
        &mut store,
        &AppAction::SelectStage(Some("custom".to_string())),
    );

    apply_store_action(
        &mut store,
        &AppAction::AddBlock {
            stage_id: "custom".to_string(),
            kind: "enrich".to_string(),
            label: "Enrichment".to_string(),
        },
    );
    apply_store_action(
        &mut store,
        &AppAction::SelectModel {
            stage_id: "custom".to_string(),
            option: "streaming".to_string(),
        },
    );

    let custom = store.active().expect("custom is active");
    let StageDetail::Custom {
        blueprint, model, ..
    } = &custom.detail
    else {
        panic!("custom stage must stay custom");
    };

    assert_eq!(blueprint.nodes.len(), 4);
    assert_eq!(blueprint.edges.len(), 3);
    let tail_edge = blueprint.edges.last().unwrap();
    assert_eq!(tail_edge.from, "sink-1");
    assert_eq!(tail_edge.to, blueprint.nodes.last().unwrap().id);
    assert_eq!(model.as_ref().unwrap().selected, "streaming");
}

#[test]
fn test_closing_the_detail_view() {
    let mut store = seeded_store();
    apply_store_action(
        &mut store,
        &AppAction::SelectStage(Some("ingest".to_string())),
    );
    assert_eq!(store.active_id(), Some("ingest"));

    apply_store_action(&mut store, &AppAction::SelectStage(None));
    assert_eq!(store.active_id(), None);
}

#[test]
fn test_chrome_actions_are_not_store_actions() {
    let mut store = seeded_store();
    assert!(!apply_store_action(&mut store, &AppAction::OpenCatalog));
    assert!(!apply_store_action(&mut store, &AppAction::ResetCatalog));
    assert!(!apply_store_action(
        &mut store,
        &AppAction::SetDarkMode(false)
    ));
}

#[test]
fn test_updates_against_missing_stage_are_noops() {
    let mut store = seeded_store();
    let before: Vec<_> = store.records().to_vec();

    apply_store_action(
        &mut store,
        &AppAction::ApplyPreset {
            stage_id: "warehouse".to_string(),
            name: "Advanced".to_string(),
        },
    );

    for (old, new) in before.iter().zip(store.records()) {
        assert!(std::sync::Arc::ptr_eq(old, new));
    }
}
