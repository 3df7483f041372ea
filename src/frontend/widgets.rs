//! Custom widgets for the Stage View UI
//!
//! This module provides reusable UI widgets for the application.
//!
//! # Widgets
//!
//! - [`MeterBar`] - Labeled 0-100 percentage bar for the cosmetic meters
//! - [`StackChips`] - Row of small technology-name chips
//! - [`TypeBadge`] - Colored badge naming a stage's panel variant

use egui::{Color32, Response, Ui, Widget};

/// A labeled horizontal bar showing a 0-100 score
pub struct MeterBar {
    label: String,
    value: u8,
    color: Color32,
    width: f32,
}

impl MeterBar {
    /// Create a new meter bar; `value` is clamped to 100 at render time
    pub fn new(label: impl Into<String>, value: u8) -> Self {
        Self {
            label: label.into(),
            value,
            color: Color32::from_rgb(90, 140, 220),
            width: 160.0,
        }
    }

    /// Set the fill color
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Set the bar width in points
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Widget for MeterBar {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", self.label));

            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(self.width, 10.0), egui::Sense::hover());

            if ui.is_rect_visible(rect) {
                let fraction = f32::from(self.value.min(100)) / 100.0;
                ui.painter()
                    .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
                let fill = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * fraction, rect.height()),
                );
                ui.painter().rect_filled(fill, 4.0, self.color);
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(1.0, Color32::from_gray(90)),
                    egui::StrokeKind::Outside,
                );
            }

            ui.label(format!("{}%", self.value.min(100)));
            response
        })
        .inner
    }
}

/// A wrapped row of small technology-name chips
pub struct StackChips<'a> {
    names: &'a [String],
}

impl<'a> StackChips<'a> {
    pub fn new(names: &'a [String]) -> Self {
        Self { names }
    }
}

impl Widget for StackChips<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal_wrapped(|ui| {
            for name in self.names {
                egui::Frame::new()
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(name).small());
                    });
            }
        })
        .response
    }
}

/// A colored badge naming a stage's type
pub struct TypeBadge {
    label: &'static str,
    color: Color32,
}

impl TypeBadge {
    /// Create a badge for a stage-type label
    pub fn new(type_label: &'static str) -> Self {
        Self {
            label: type_label,
            color: Self::color_for(type_label),
        }
    }

    /// Badge color by stage type
    fn color_for(type_label: &str) -> Color32 {
        match type_label {
            "prebuilt" => Color32::from_rgb(60, 140, 60),
            "configurable" => Color32::from_rgb(60, 100, 180),
            "custom" => Color32::from_rgb(200, 120, 40),
            _ => Color32::from_gray(100),
        }
    }
}

impl Widget for TypeBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        egui::Frame::new()
            .fill(self.color)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(self.label)
                        .small()
                        .color(Color32::WHITE),
                );
            })
            .response
    }
}
