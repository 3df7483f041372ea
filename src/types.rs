//! Core data types for Stage View
//!
//! This module contains the fundamental data structures used throughout
//! the application for representing pipeline stages and their editable
//! detail payloads.
//!
//! # Main Types
//!
//! - [`StageRecord`] - One pipeline stage: identity, display text, stack, payload
//! - [`StageDetail`] - Tagged payload selecting one of three panel behaviors
//! - [`ToggleSection`] / [`ToggleItem`] - Grouped boolean feature flags
//! - [`Tuning`] - Preset selector plus continuous-value sliders
//! - [`Blueprint`] - Small directed node/edge graph built by chain append
//!
//! # Payload Variants
//!
//! A stage's `type` tag is fixed at creation and selects its detail panel:
//!
//! - `prebuilt` carries toggle sections only
//! - `configurable` carries tuning state plus optional toggle sections and
//!   keyword chips
//! - `custom` carries a blueprint graph, an addable-block palette, and an
//!   optional single-choice model selector
//!
//! Each variant carries only its own fields, so renderers never check for
//! absent data. An unrecognized tag fails deserialization of the whole
//! dataset, which is the fail-fast contract for malformed seed data.
//!
//! # Mutation
//!
//! All user-facing edits are methods here: toggling one item, applying a
//! preset atomically, setting one slider value, appending a blueprint
//! block, selecting a model option. Operations that reach the wrong
//! payload variant are warn-level no-ops; the UI cannot normally produce
//! them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower clamp bound for the derived meter scores
pub const METER_FLOOR: u8 = 10;

/// Upper clamp bound for the derived meter scores
pub const METER_CEIL: u8 = 95;

/// Slider values are integers in 0..=SLIDER_MAX
pub const SLIDER_MAX: u8 = 100;

/// One pipeline stage as shown in the card strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Unique stable identifier, immutable once created
    pub id: String,
    /// Card headline
    pub title: String,
    /// One-sentence description under the headline
    pub one_liner: String,
    /// Technology names shown as chips (display-only)
    #[serde(default)]
    pub stack: Vec<String>,
    /// Type-tagged detail payload
    #[serde(flatten)]
    pub detail: StageDetail,
}

/// Type-specific payload of a stage
///
/// The tag is fixed at creation and never changed by any operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StageDetail {
    /// Ready-made stage: grouped feature toggles
    Prebuilt {
        sections: Vec<ToggleSection>,
    },
    /// Tunable stage: presets + sliders, optional toggles and keywords
    Configurable {
        tuning: Tuning,
        #[serde(default)]
        options: Vec<ToggleSection>,
        #[serde(default)]
        keywords: Vec<String>,
    },
    /// Build-your-own stage: blueprint graph with an addable-block palette
    Custom {
        blueprint: Blueprint,
        #[serde(default)]
        palette: Vec<PaletteBlock>,
        #[serde(default)]
        model: Option<ModelChoice>,
    },
}

impl StageRecord {
    /// Short lowercase label for the stage's type badge
    pub fn type_label(&self) -> &'static str {
        match self.detail {
            StageDetail::Prebuilt { .. } => "prebuilt",
            StageDetail::Configurable { .. } => "configurable",
            StageDetail::Custom { .. } => "custom",
        }
    }
}

impl StageDetail {
    /// Flip the `enabled` flag of the single item matched by
    /// (section title, item key), leaving every sibling untouched.
    ///
    /// Prebuilt stages toggle within `sections`, configurable stages
    /// within `options`. Anything else is a warn-level no-op.
    pub fn toggle_item(&mut self, section_title: &str, key: &str) {
        let sections = match self {
            StageDetail::Prebuilt { sections } => sections,
            StageDetail::Configurable { options, .. } => options,
            StageDetail::Custom { .. } => {
                tracing::warn!(section_title, key, "toggle on a custom stage ignored");
                return;
            }
        };
        if !toggle_in_sections(sections, section_title, key) {
            tracing::warn!(section_title, key, "toggle target not found");
        }
    }

    /// Apply a named preset to the tuning state (configurable stages only)
    pub fn apply_preset(&mut self, name: &str) {
        match self {
            StageDetail::Configurable { tuning, .. } => tuning.apply_preset(name),
            _ => tracing::warn!(name, "preset on a non-configurable stage ignored"),
        }
    }

    /// Set one slider value (configurable stages only)
    pub fn set_slider(&mut self, key: &str, value: u8) {
        match self {
            StageDetail::Configurable { tuning, .. } => tuning.set_value(key, value),
            _ => tracing::warn!(key, "slider on a non-configurable stage ignored"),
        }
    }

    /// Append a blueprint block (custom stages only)
    pub fn add_block(&mut self, kind: &str, label: &str) {
        match self {
            StageDetail::Custom { blueprint, .. } => {
                blueprint.add_block(kind, label);
            }
            _ => tracing::warn!(kind, "add block on a non-custom stage ignored"),
        }
    }

    /// Select a model option (custom stages with a model selector only)
    pub fn select_model(&mut self, option: &str) {
        match self {
            StageDetail::Custom {
                model: Some(model), ..
            } => model.select(option),
            _ => tracing::warn!(option, "model selection without a model ignored"),
        }
    }
}

// ==================== Toggle sections ====================

/// A named group of boolean feature flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleSection {
    pub title: String,
    /// Item keys are unique within a section
    pub items: Vec<ToggleItem>,
}

/// A single boolean feature flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleItem {
    pub key: String,
    pub label: String,
    pub enabled: bool,
}

/// Flip the item matched by (section title, item key). Returns whether a
/// matching item was found.
fn toggle_in_sections(sections: &mut [ToggleSection], section_title: &str, key: &str) -> bool {
    for section in sections.iter_mut() {
        if section.title != section_title {
            continue;
        }
        for item in section.items.iter_mut() {
            if item.key == key {
                item.enabled = !item.enabled;
                return true;
            }
        }
    }
    false
}

// ==================== Tuning ====================

/// Preset + slider state for a configurable stage
///
/// `preset` is the name of the last-applied preset. Manual slider edits
/// deliberately leave it untouched: the label becomes decorative rather
/// than being revalidated or relabeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Name of the currently selected preset
    pub preset: String,
    /// Available presets in display order
    pub presets: Vec<Preset>,
    /// Currently effective slider values, 0..=100
    pub values: BTreeMap<String, u8>,
    /// Declares which keys are user-adjustable, in display order
    pub sliders: Vec<SliderSpec>,
}

/// A named mapping of slider keys to values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub values: BTreeMap<String, u8>,
}

/// Declaration of one user-adjustable slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub key: String,
    pub label: String,
    pub hint: String,
}

/// Contribution weights for the derived effort meter
const EFFORT_WEIGHTS: &[(&str, f32)] = &[
    ("transform_depth", 0.35),
    ("validation", 0.30),
    ("freshness", 0.20),
    ("change_handling", 0.15),
];

/// Contribution weights for the derived flexibility meter
const FLEXIBILITY_WEIGHTS: &[(&str, f32)] = &[
    ("change_handling", 0.40),
    ("transform_depth", 0.30),
    ("freshness", 0.20),
    ("cost_control", 0.10),
];

impl Tuning {
    /// Look up a preset by name
    pub fn preset_named(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Atomically replace all of `values` with the named preset's mapping
    /// and record the preset name. Partial overwrite never happens; an
    /// unknown name is a warn-level no-op.
    pub fn apply_preset(&mut self, name: &str) {
        let Some(mapping) = self
            .presets
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.values.clone())
        else {
            tracing::warn!(name, "unknown preset ignored");
            return;
        };
        self.values = mapping;
        self.preset = name.to_string();
    }

    /// Set one slider value directly, clamped to 0..=100. The preset
    /// label is left as-is and becomes stale.
    pub fn set_value(&mut self, key: &str, value: u8) {
        self.values.insert(key.to_string(), value.min(SLIDER_MAX));
    }

    /// Derived build-effort score, clamped to [10, 95]
    pub fn effort(&self) -> u8 {
        weighted_meter(&self.values, EFFORT_WEIGHTS)
    }

    /// Derived flexibility score, clamped to [10, 95]
    pub fn flexibility(&self) -> u8 {
        weighted_meter(&self.values, FLEXIBILITY_WEIGHTS)
    }
}

/// Convex-combination average of the weighted keys present in `values`,
/// renormalized over the present weights, clamped to [METER_FLOOR,
/// METER_CEIL]. Falls back to the plain mean when no weighted key is
/// present, so datasets with other slider keys still get a monotone,
/// bounded score.
fn weighted_meter(values: &BTreeMap<String, u8>, weights: &[(&str, f32)]) -> u8 {
    let mut acc = 0.0f32;
    let mut weight_sum = 0.0f32;
    for (key, weight) in weights {
        if let Some(v) = values.get(*key) {
            acc += f32::from(*v) * weight;
            weight_sum += weight;
        }
    }
    let score = if weight_sum > 0.0 {
        acc / weight_sum
    } else if values.is_empty() {
        0.0
    } else {
        let sum: u32 = values.values().map(|v| u32::from(*v)).sum();
        sum as f32 / values.len() as f32
    };
    (score.round() as i64).clamp(i64::from(METER_FLOOR), i64::from(METER_CEIL)) as u8
}

// ==================== Blueprint ====================

/// A small directed graph built exclusively by chain append
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub nodes: Vec<BlockNode>,
    pub edges: Vec<BlockEdge>,
}

/// One block in a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    pub id: String,
    pub label: String,
}

/// A directed edge between two blocks, referenced by node id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockEdge {
    pub from: String,
    pub to: String,
}

/// An addable block template shown in the blueprint palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteBlock {
    pub kind: String,
    pub label: String,
}

impl Blueprint {
    /// Whether a node with the given id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Index of a node by id, if present
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Append a new block and auto-link it to the previous tail.
    ///
    /// The fresh id is unique among current nodes (nodes are never
    /// removed, so that equals lifetime uniqueness). The very first node
    /// creates no edge; every later append creates exactly one edge from
    /// the previous last node, so the graph is always a simple path.
    /// Returns the new node's id.
    pub fn add_block(&mut self, kind: &str, label: &str) -> String {
        let id = self.fresh_id(kind);
        if let Some(prev) = self.nodes.last() {
            self.edges.push(BlockEdge {
                from: prev.id.clone(),
                to: id.clone(),
            });
        }
        self.nodes.push(BlockNode {
            id: id.clone(),
            label: label.to_string(),
        });
        id
    }

    /// Edges whose both endpoints resolve to present nodes, as index
    /// pairs. Dangling references are skipped, never reported.
    pub fn resolved_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().filter_map(|e| {
            let from = self.node_index(&e.from)?;
            let to = self.node_index(&e.to)?;
            Some((from, to))
        })
    }

    /// Generate `{kind}-{n}` with `n` seeded from the node count and
    /// bumped past any collision. Collisions never overwrite or alias an
    /// existing node.
    fn fresh_id(&self, kind: &str) -> String {
        let mut n = self.nodes.len() + 1;
        loop {
            let candidate = format!("{kind}-{n}");
            if !self.contains_node(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

// ==================== Model choice ====================

/// Single-choice selector state for a custom stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelChoice {
    pub selected: String,
    pub options: Vec<String>,
}

impl ModelChoice {
    /// Set the selection. Options outside `options` are rejected with a
    /// warning rather than silently adopted.
    pub fn select(&mut self, option: &str) {
        if self.options.iter().any(|o| o == option) {
            self.selected = option.to_string();
        } else {
            tracing::warn!(option, "model option not in the offered set");
        }
    }
}
