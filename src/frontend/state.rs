//! Shared action types for the frontend
//!
//! Panels return `Vec<AppAction>` instead of mutating the store directly.
//! This enables:
//! - Testable panel logic
//! - Clear separation between UI and store mutation
//! - Centralized action handling in the app
//!
//! All store-directed actions funnel through [`apply_store_action`], which
//! is pure over the store and drives the same code paths the integration
//! tests exercise without any rendering surface.

use crate::store::StageStore;

/// Actions that any panel can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Selection
    /// Activate a stage (Some) or close the detail view (None)
    SelectStage(Option<String>),

    // Record edits
    /// Flip one toggle item identified by (section title, item key)
    ToggleItem {
        stage_id: String,
        section: String,
        key: String,
    },
    /// Atomically apply a named tuning preset
    ApplyPreset { stage_id: String, name: String },
    /// Set one slider value directly
    SetSlider {
        stage_id: String,
        key: String,
        value: u8,
    },
    /// Append a blueprint block from the palette
    AddBlock {
        stage_id: String,
        kind: String,
        label: String,
    },
    /// Select a model option on a custom stage
    SelectModel { stage_id: String, option: String },

    // App chrome
    /// Open a native file dialog to swap the stage catalog
    OpenCatalog,
    /// Drop back to the built-in catalog
    ResetCatalog,
    /// Toggle the UI theme
    SetDarkMode(bool),
}

/// Apply a store-directed action. Returns `false` for app-level actions
/// (dialogs, theme) the caller must handle itself.
pub fn apply_store_action(store: &mut StageStore, action: &AppAction) -> bool {
    match action {
        AppAction::SelectStage(id) => store.select(id.as_deref()),
        AppAction::ToggleItem {
            stage_id,
            section,
            key,
        } => store.update(stage_id, |r| r.detail.toggle_item(section, key)),
        AppAction::ApplyPreset { stage_id, name } => {
            store.update(stage_id, |r| r.detail.apply_preset(name))
        }
        AppAction::SetSlider {
            stage_id,
            key,
            value,
        } => store.update(stage_id, |r| r.detail.set_slider(key, *value)),
        AppAction::AddBlock {
            stage_id,
            kind,
            label,
        } => store.update(stage_id, |r| r.detail.add_block(kind, label)),
        AppAction::SelectModel { stage_id, option } => {
            store.update(stage_id, |r| r.detail.select_model(option))
        }
        AppAction::OpenCatalog | AppAction::ResetCatalog | AppAction::SetDarkMode(_) => {
            return false;
        }
    }
    true
}
