//! Tuning panel — detail view for configurable stages.
//!
//! Preset buttons apply a whole value mapping atomically; sliders set one
//! value each and deliberately leave the preset label stale. The derived
//! effort/flexibility meters re-compute from the current values every
//! frame.

use egui::Ui;

use crate::frontend::state::AppAction;
use crate::frontend::widgets::MeterBar;
use crate::types::{StageDetail, StageRecord, SLIDER_MAX};

/// Render the tuning panel
pub fn render(record: &StageRecord, ui: &mut Ui) -> Vec<AppAction> {
    let StageDetail::Configurable {
        tuning,
        options,
        keywords,
    } = &record.detail
    else {
        tracing::warn!(id = %record.id, "tuning panel on a non-configurable stage");
        ui.label("Mismatched stage payload");
        return Vec::new();
    };

    let mut actions = Vec::new();

    // Preset row
    ui.horizontal(|ui| {
        ui.label("Preset:");
        for preset in &tuning.presets {
            let selected = tuning.preset == preset.name;
            if ui.selectable_label(selected, &preset.name).clicked() && !selected {
                actions.push(AppAction::ApplyPreset {
                    stage_id: record.id.clone(),
                    name: preset.name.clone(),
                });
            }
        }
    });
    ui.add_space(4.0);

    // Sliders, in declared order
    egui::Grid::new("tuning_sliders")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for spec in &tuning.sliders {
                ui.label(&spec.label);
                let mut value = tuning.values.get(&spec.key).copied().unwrap_or(0);
                let response = ui
                    .add(egui::Slider::new(&mut value, 0..=SLIDER_MAX))
                    .on_hover_text(&spec.hint);
                if response.changed() {
                    actions.push(AppAction::SetSlider {
                        stage_id: record.id.clone(),
                        key: spec.key.clone(),
                        value,
                    });
                }
                ui.end_row();
            }
        });

    ui.separator();
    ui.add(MeterBar::new("Effort", tuning.effort()));
    ui.add(MeterBar::new("Flexibility", tuning.flexibility()));

    if !options.is_empty() {
        ui.separator();
        super::toggle_sections_ui(&record.id, options, ui, &mut actions);
    }

    if !keywords.is_empty() {
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            for keyword in keywords {
                ui.label(egui::RichText::new(keyword).small().italics());
            }
        });
    }

    actions
}
