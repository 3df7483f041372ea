//! Detail panel modules
//!
//! Each panel provides a render function that takes the active record and
//! &mut Ui, and returns Vec<AppAction> instead of mutating state directly.

pub mod blueprint;
pub mod toggles;
pub mod tuning;

use egui::Ui;

use crate::frontend::state::AppAction;
use crate::types::ToggleSection;

/// Render toggle sections as grouped boolean switches.
///
/// Shared by the grouped-toggle panel (`sections`) and the tuning panel
/// (`options`); toggling emits an action targeting exactly one
/// (section title, item key) pair.
pub(crate) fn toggle_sections_ui(
    stage_id: &str,
    sections: &[ToggleSection],
    ui: &mut Ui,
    actions: &mut Vec<AppAction>,
) {
    for section in sections {
        ui.label(egui::RichText::new(&section.title).strong());
        for item in &section.items {
            let mut enabled = item.enabled;
            if ui.checkbox(&mut enabled, &item.label).changed() {
                actions.push(AppAction::ToggleItem {
                    stage_id: stage_id.to_string(),
                    section: section.title.clone(),
                    key: item.key.clone(),
                });
            }
        }
        ui.add_space(6.0);
    }
}
