//! Stage card strip — the horizontally scrolling row of pipeline stages.
//!
//! Each card is a clickable summary of one stage: title, one-liner, type
//! badge, and stack chips. Clicking a card opens its detail panel;
//! clicking the active card again closes it.

use egui::Ui;

use crate::frontend::state::AppAction;
use crate::frontend::widgets::{StackChips, TypeBadge};
use crate::store::StageStore;

const CARD_WIDTH: f32 = 230.0;
const CARD_HEIGHT: f32 = 120.0;

/// Render the card strip. Returns selection actions.
pub fn render(store: &StageStore, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    egui::ScrollArea::horizontal()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for record in store.records() {
                    let is_active = store.active_id() == Some(record.id.as_str());

                    let response = card(ui, record, is_active);
                    if response.clicked() {
                        actions.push(AppAction::SelectStage(if is_active {
                            None
                        } else {
                            Some(record.id.clone())
                        }));
                    }
                }
            });
        });

    actions
}

/// One stage card. The whole card surface is clickable.
fn card(ui: &mut Ui, record: &crate::types::StageRecord, is_active: bool) -> egui::Response {
    let stroke = if is_active {
        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        egui::Stroke::new(1.0, ui.visuals().window_stroke.color)
    };

    let frame = egui::Frame::group(ui.style())
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(8));

    let inner = frame.show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.set_height(CARD_HEIGHT);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.strong(&record.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(TypeBadge::new(record.type_label()));
                });
            });
            ui.label(egui::RichText::new(&record.one_liner).small());
            ui.add_space(4.0);
            ui.add(StackChips::new(&record.stack));
        });
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
