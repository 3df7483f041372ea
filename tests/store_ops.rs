//! Integration tests for the stage store and record operations
//!
//! These tests validate the store-level contracts: seed order and id-set
//! stability, single-target mutation, preset atomicity, meter bounds, and
//! blueprint chain growth.

mod common;

use common::{seeded_store, snapshot, tuning_of};
use proptest::prelude::*;
use stageview_rs::types::{StageDetail, METER_CEIL, METER_FLOOR};

#[test]
fn test_toggle_flips_only_target_across_store() {
    let mut store = seeded_store();
    let before = snapshot(&store);

    store.update("ingest", |r| r.detail.toggle_item("Sources", "cdc"));

    let after = snapshot(&store);
    for (old, new) in before.iter().zip(&after) {
        if new.id != "ingest" {
            assert_eq!(old, new, "non-target records must be unchanged");
            continue;
        }
        let (StageDetail::Prebuilt { sections: old_s }, StageDetail::Prebuilt { sections: new_s }) =
            (&old.detail, &new.detail)
        else {
            panic!("ingest must stay prebuilt");
        };
        for (os, ns) in old_s.iter().zip(new_s) {
            for (oi, ni) in os.items.iter().zip(&ns.items) {
                if os.title == "Sources" && oi.key == "cdc" {
                    assert_eq!(ni.enabled, !oi.enabled);
                } else {
                    assert_eq!(oi, ni, "sibling items must be untouched");
                }
            }
        }
    }
}

#[test]
fn test_preset_application_is_deep_copy() {
    let mut store = seeded_store();
    store.update("etl", |r| r.detail.apply_preset("Advanced"));

    let etl = store
        .records()
        .iter()
        .find(|r| r.id == "etl")
        .expect("etl stage");
    let tuning = tuning_of(etl);
    assert_eq!(tuning.preset, "Advanced");
    assert_eq!(
        tuning.values,
        tuning.preset_named("Advanced").unwrap().values
    );

    // Editing one slider afterwards must not touch the others
    store.update("etl", |r| r.detail.set_slider("freshness", 12));
    let etl = store.records().iter().find(|r| r.id == "etl").unwrap();
    let tuning = tuning_of(etl);
    assert_eq!(tuning.values["freshness"], 12);
    assert_eq!(tuning.values["transform_depth"], 80);
    assert_eq!(tuning.values["validation"], 85);
    assert_eq!(tuning.values["cost_control"], 55);
    assert_eq!(tuning.values["change_handling"], 80);
    // The preset mapping itself must be unaffected by the slider edit
    assert_eq!(tuning.preset_named("Advanced").unwrap().values["freshness"], 85);
}

#[test]
fn test_meter_bounds_at_slider_extremes() {
    let mut store = seeded_store();
    let keys = [
        "freshness",
        "transform_depth",
        "validation",
        "cost_control",
        "change_handling",
    ];

    for key in keys {
        store.update("etl", |r| r.detail.set_slider(key, 0));
    }
    let tuning = tuning_of(store.records().iter().find(|r| r.id == "etl").unwrap());
    assert_eq!(tuning.effort(), METER_FLOOR);
    assert_eq!(tuning.flexibility(), METER_FLOOR);

    for key in keys {
        store.update("etl", |r| r.detail.set_slider(key, 100));
    }
    let tuning = tuning_of(store.records().iter().find(|r| r.id == "etl").unwrap());
    assert_eq!(tuning.effort(), METER_CEIL);
    assert_eq!(tuning.flexibility(), METER_CEIL);
}

#[test]
fn test_add_block_grows_a_simple_path() {
    let mut store = seeded_store();

    let node_edge_counts = |store: &stageview_rs::StageStore| {
        let custom = store.records().iter().find(|r| r.id == "custom").unwrap();
        let StageDetail::Custom { blueprint, .. } = &custom.detail else {
            panic!("custom stage must carry a blueprint");
        };
        (blueprint.nodes.len(), blueprint.edges.len())
    };

    let (n0, e0) = node_edge_counts(&store);
    assert_eq!(e0, n0 - 1, "seed blueprint is a chain");

    for i in 1..=3 {
        store.update("custom", |r| r.detail.add_block("enrich", "Enrichment"));
        let (n, e) = node_edge_counts(&store);
        assert_eq!(n, n0 + i);
        assert_eq!(e, e0 + i, "each append adds exactly one edge");
    }

    // Still a simple path: every edge resolves, in insertion order
    let custom = store.records().iter().find(|r| r.id == "custom").unwrap();
    let StageDetail::Custom { blueprint, .. } = &custom.detail else {
        unreachable!();
    };
    let resolved: Vec<_> = blueprint.resolved_edges().collect();
    assert_eq!(resolved.len(), blueprint.edges.len());
    for (i, (from, to)) in resolved.iter().enumerate() {
        assert_eq!(*from, i);
        assert_eq!(*to, i + 1);
    }
}

#[test]
fn test_select_absent_id_keeps_active() {
    let mut store = seeded_store();
    store.select(Some("custom"));
    store.select(Some("warehouse"));
    assert_eq!(store.active_id(), Some("custom"));
}

// ==================== Property tests ====================

/// One user-level operation against the seeded catalog
#[derive(Debug, Clone)]
enum Op {
    Toggle(&'static str, &'static str, &'static str),
    Preset(&'static str),
    Slider(&'static str, u8),
    AddBlock(&'static str, &'static str),
    Select(Option<&'static str>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![
            Just(Op::Toggle("ingest", "Sources", "cdc")),
            Just(Op::Toggle("ingest", "Delivery", "dedup")),
            Just(Op::Toggle("etl", "Execution", "incremental")),
            Just(Op::Toggle("activate", "Destinations", "ads")),
            // Misses are defined no-ops
            Just(Op::Toggle("ingest", "Sources", "missing")),
            Just(Op::Toggle("warehouse", "Sources", "cdc")),
        ],
        prop_oneof![
            Just(Op::Preset("Essentials")),
            Just(Op::Preset("Balanced")),
            Just(Op::Preset("Advanced")),
            Just(Op::Preset("Mythical")),
        ],
        ("freshness|transform_depth|validation|cost_control|change_handling", any::<u8>())
            .prop_map(|(key, v)| {
                let key = match key.as_str() {
                    "freshness" => "freshness",
                    "transform_depth" => "transform_depth",
                    "validation" => "validation",
                    "cost_control" => "cost_control",
                    _ => "change_handling",
                };
                Op::Slider(key, v)
            }),
        prop_oneof![
            Just(Op::AddBlock("transform", "Transform")),
            Just(Op::AddBlock("sink", "Sink")),
        ],
        prop_oneof![
            Just(Op::Select(Some("ingest"))),
            Just(Op::Select(Some("etl"))),
            Just(Op::Select(Some("missing"))),
            Just(Op::Select(None)),
        ],
    ]
}

fn apply(store: &mut stageview_rs::StageStore, op: &Op) {
    match op {
        Op::Toggle(id, section, key) => store.update(id, |r| r.detail.toggle_item(section, key)),
        Op::Preset(name) => store.update("etl", |r| r.detail.apply_preset(name)),
        Op::Slider(key, v) => store.update("etl", |r| r.detail.set_slider(key, *v)),
        Op::AddBlock(kind, label) => store.update("custom", |r| r.detail.add_block(kind, label)),
        Op::Select(id) => store.select(*id),
    }
}

proptest! {
    /// Record count and id set survive any operation sequence
    #[test]
    fn prop_id_set_is_invariant(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut store = seeded_store();
        let ids_before: Vec<_> = store.records().iter().map(|r| r.id.clone()).collect();

        for op in &ops {
            apply(&mut store, op);
        }

        let ids_after: Vec<_> = store.records().iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids_before, ids_after);
    }

    /// Slider values stay integers in 0..=100 and meters stay clamped
    #[test]
    fn prop_values_and_meters_stay_bounded(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut store = seeded_store();
        for op in &ops {
            apply(&mut store, op);
        }

        let etl = store.records().iter().find(|r| r.id == "etl").unwrap();
        let tuning = tuning_of(etl);
        for value in tuning.values.values() {
            prop_assert!(*value <= 100);
        }
        prop_assert!((METER_FLOOR..=METER_CEIL).contains(&tuning.effort()));
        prop_assert!((METER_FLOOR..=METER_CEIL).contains(&tuning.flexibility()));
    }

    /// Blueprint node ids stay unique and the graph stays a chain
    #[test]
    fn prop_blueprint_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut store = seeded_store();
        for op in &ops {
            apply(&mut store, op);
        }

        let custom = store.records().iter().find(|r| r.id == "custom").unwrap();
        let StageDetail::Custom { blueprint, .. } = &custom.detail else {
            panic!("custom stage must carry a blueprint");
        };
        let unique: std::collections::HashSet<_> =
            blueprint.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(unique.len(), blueprint.nodes.len());
        prop_assert_eq!(blueprint.edges.len(), blueprint.nodes.len() - 1);
    }
}
