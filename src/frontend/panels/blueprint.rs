//! Blueprint panel — detail view for custom stages.
//!
//! Renders the blueprint graph as a painted canvas: nodes laid out
//! left-to-right in insertion order at fixed spacing, edges drawn only
//! between endpoints that resolve to present nodes. The palette row
//! appends chain blocks; the optional model selector is a single-choice
//! row.

use egui::{Color32, Pos2, Rect, Stroke, Ui, Vec2};

use crate::frontend::state::AppAction;
use crate::types::{Blueprint, StageDetail, StageRecord};

const NODE_WIDTH: f32 = 130.0;
const NODE_HEIGHT: f32 = 48.0;
const NODE_SPACING_X: f32 = 170.0;
const CANVAS_HEIGHT: f32 = 120.0;
const CANVAS_MARGIN: f32 = 16.0;

/// Render the blueprint panel
pub fn render(record: &StageRecord, ui: &mut Ui) -> Vec<AppAction> {
    let StageDetail::Custom {
        blueprint,
        palette,
        model,
    } = &record.detail
    else {
        tracing::warn!(id = %record.id, "blueprint panel on a non-custom stage");
        ui.label("Mismatched stage payload");
        return Vec::new();
    };

    let mut actions = Vec::new();

    // Palette row: each template appends one block to the chain
    ui.horizontal(|ui| {
        ui.label("Add block:");
        for block in palette {
            if ui.button(format!("+ {}", block.label)).clicked() {
                actions.push(AppAction::AddBlock {
                    stage_id: record.id.clone(),
                    kind: block.kind.clone(),
                    label: block.label.clone(),
                });
            }
        }
    });
    ui.add_space(4.0);

    draw_canvas(blueprint, ui);

    if let Some(model) = model {
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Model:");
            for option in &model.options {
                let selected = model.selected == *option;
                if ui.selectable_label(selected, option).clicked() && !selected {
                    actions.push(AppAction::SelectModel {
                        stage_id: record.id.clone(),
                        option: option.clone(),
                    });
                }
            }
        });
    }

    actions
}

/// Paint the node/edge canvas inside a horizontal scroll area
fn draw_canvas(blueprint: &Blueprint, ui: &mut Ui) {
    egui::ScrollArea::horizontal()
        .id_salt("blueprint_canvas")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let node_count = blueprint.nodes.len();
            let content_width = (CANVAS_MARGIN * 2.0
                + node_count.saturating_sub(1) as f32 * NODE_SPACING_X
                + NODE_WIDTH)
                .max(ui.available_width());

            let (response, painter) = ui.allocate_painter(
                Vec2::new(content_width, CANVAS_HEIGHT),
                egui::Sense::hover(),
            );
            let canvas_rect = response.rect;
            painter.rect_filled(canvas_rect, 6.0, Color32::from_gray(30));

            if node_count == 0 {
                painter.text(
                    canvas_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Empty blueprint — add a block to start the chain",
                    egui::FontId::proportional(12.0),
                    Color32::from_gray(150),
                );
                return;
            }

            // Fixed left-to-right layout in insertion order
            let node_rect = |index: usize| -> Rect {
                let min = Pos2::new(
                    canvas_rect.left() + CANVAS_MARGIN + index as f32 * NODE_SPACING_X,
                    canvas_rect.center().y - NODE_HEIGHT * 0.5,
                );
                Rect::from_min_size(min, Vec2::new(NODE_WIDTH, NODE_HEIGHT))
            };

            // Edges first, behind nodes. Dangling references resolve to
            // nothing and are simply not drawn.
            for (from, to) in blueprint.resolved_edges() {
                let from_rect = node_rect(from);
                let to_rect = node_rect(to);
                let start = Pos2::new(from_rect.right(), from_rect.center().y);
                let end = Pos2::new(to_rect.left(), to_rect.center().y);
                painter.line_segment([start, end], Stroke::new(2.0, Color32::from_gray(150)));
                painter.circle_filled(start, 4.0, Color32::from_gray(200));
                painter.circle_filled(end, 4.0, Color32::from_gray(200));
            }

            for (index, node) in blueprint.nodes.iter().enumerate() {
                let rect = node_rect(index);
                painter.rect_filled(rect, 6.0, node_color(&node.id));
                painter.rect_stroke(
                    rect,
                    6.0,
                    Stroke::new(1.0, Color32::from_gray(80)),
                    egui::StrokeKind::Outside,
                );
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &node.label,
                    egui::FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }
        });
}

/// Determine node color from the kind prefix of its id
fn node_color(id: &str) -> Color32 {
    let kind = id.split('-').next().unwrap_or("");
    match kind {
        "source" => Color32::from_rgb(60, 140, 60),
        "transform" | "enrich" => Color32::from_rgb(60, 100, 180),
        "sink" => Color32::from_rgb(200, 120, 40),
        _ => Color32::from_rgb(100, 100, 100),
    }
}
