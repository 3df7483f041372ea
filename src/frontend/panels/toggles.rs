//! Grouped-toggle panel — detail view for prebuilt stages.
//!
//! Renders each section's items as boolean switches plus two static
//! cosmetic meters. The meters are component-local constants for this
//! variant: a prebuilt stage always reads as low effort, middling
//! flexibility, regardless of which items are enabled.

use egui::Ui;

use crate::frontend::state::AppAction;
use crate::frontend::widgets::MeterBar;
use crate::types::{StageDetail, StageRecord};

/// Static meter values for every prebuilt stage
const PREBUILT_EFFORT: u8 = 20;
const PREBUILT_FLEXIBILITY: u8 = 35;

/// Render the grouped-toggle panel
pub fn render(record: &StageRecord, ui: &mut Ui) -> Vec<AppAction> {
    let StageDetail::Prebuilt { sections } = &record.detail else {
        tracing::warn!(id = %record.id, "grouped-toggle panel on a non-prebuilt stage");
        ui.label("Mismatched stage payload");
        return Vec::new();
    };

    let mut actions = Vec::new();

    super::toggle_sections_ui(&record.id, sections, ui, &mut actions);

    ui.separator();
    ui.add(MeterBar::new("Effort", PREBUILT_EFFORT));
    ui.add(MeterBar::new("Flexibility", PREBUILT_FLEXIBILITY));

    actions
}
