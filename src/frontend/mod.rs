//! Frontend module for egui UI
//!
//! This module provides the main UI using eframe/egui. The layout is a
//! single window: a horizontally scrolling strip of stage cards on top
//! and, when a stage is active, its detail panel below.
//!
//! # Architecture
//!
//! Panels never mutate the store. They return [`AppAction`]s, which the
//! app applies after rendering — every mutation happens synchronously
//! inside the input handler, serialized by the app's exclusive ownership
//! of the store.
//!
//! # Main Types
//!
//! - [`StageViewApp`] - Main application state implementing [`eframe::App`]
//!
//! # Submodules
//!
//! - `dispatch` - Payload-to-panel mapping
//! - `panels` - The three detail panel render functions
//! - `strip` - The stage card strip
//! - `state` - Action types and store-action application
//! - `widgets` - Custom UI widgets (meter bars, chips, badges)

pub mod dispatch;
pub mod panels;
pub mod state;
pub mod strip;
pub mod widgets;

pub use state::{apply_store_action, AppAction};

use std::path::PathBuf;

use egui::Ui;

use crate::catalog::{self, Dataset};
use crate::config::AppState;
use crate::frontend::dispatch::PanelKind;
use crate::frontend::widgets::{StackChips, TypeBadge};
use crate::store::StageStore;
use crate::types::StageRecord;

/// Main application state for the stage explorer
pub struct StageViewApp {
    store: StageStore,
    app_state: AppState,
    last_error: Option<String>,
}

impl StageViewApp {
    /// Create the app and apply the saved theme preference
    pub fn new(cc: &eframe::CreationContext<'_>, store: StageStore, app_state: AppState) -> Self {
        if app_state.ui_preferences.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        Self {
            store,
            app_state,
            last_error: None,
        }
    }

    /// Apply collected actions. Store-directed actions go through
    /// [`apply_store_action`]; the rest are app chrome.
    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<AppAction>) {
        for action in actions {
            if apply_store_action(&mut self.store, &action) {
                continue;
            }
            match action {
                AppAction::OpenCatalog => self.open_catalog_dialog(),
                AppAction::ResetCatalog => self.reset_catalog(),
                AppAction::SetDarkMode(dark) => self.set_dark_mode(ctx, dark),
                _ => unreachable!("store actions are handled above"),
            }
        }
    }

    fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.app_state.ui_preferences.dark_mode = dark;
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.save_app_state();
    }

    /// Let the user swap the stage catalog for another JSON file
    fn open_catalog_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Stage catalog", &["json"])
            .pick_file()
        else {
            return;
        };
        self.load_catalog(path);
    }

    /// Load a replacement catalog. A file that fails to parse or
    /// validate leaves the current store untouched.
    fn load_catalog(&mut self, path: PathBuf) {
        match Dataset::load(&path).and_then(StageStore::from_dataset) {
            Ok(store) => {
                tracing::info!(path = %path.display(), "loaded stage catalog");
                self.store.replace_with(store);
                self.app_state.set_last_catalog(path);
                self.save_app_state();
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to load catalog: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Drop back to the built-in catalog
    fn reset_catalog(&mut self) {
        let builtin = StageStore::from_dataset(catalog::builtin())
            .expect("built-in stage catalog must validate");
        self.store.replace_with(builtin);
        self.app_state.last_catalog_path = None;
        self.save_app_state();
        self.last_error = None;
    }

    fn save_app_state(&self) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {e}");
        }
    }

    /// Render the detail view for the active stage
    fn detail_view(record: &StageRecord, ui: &mut Ui) -> Vec<AppAction> {
        let mut actions = Vec::new();
        let kind = dispatch::panel_for(&record.detail);

        ui.horizontal(|ui| {
            ui.heading(&record.title);
            ui.add(TypeBadge::new(record.type_label()));
            ui.label(egui::RichText::new(kind.display_name()).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close").clicked() {
                    actions.push(AppAction::SelectStage(None));
                }
            });
        });
        ui.label(&record.one_liner);
        ui.add(StackChips::new(&record.stack));
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let panel_actions = match kind {
                    PanelKind::GroupedToggles => panels::toggles::render(record, ui),
                    PanelKind::Tuning => panels::tuning::render(record, ui),
                    PanelKind::Blueprint => panels::blueprint::render(record, ui),
                };
                actions.extend(panel_actions);
            });

        actions
    }
}

impl eframe::App for StageViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stage View");
                ui.separator();
                if ui.button("Open catalog…").clicked() {
                    actions.push(AppAction::OpenCatalog);
                }
                if ui.button("Reset catalog").clicked() {
                    actions.push(AppAction::ResetCatalog);
                }
                ui.separator();

                let dark = self.app_state.ui_preferences.dark_mode;
                let icon = if dark { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    actions.push(AppAction::SetDarkMode(!dark));
                }

                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(strip::render(&self.store, ui));
            ui.separator();

            if let Some(record) = self.store.active() {
                let record = std::sync::Arc::clone(record);
                actions.extend(Self::detail_view(&record, ui));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Select a stage to open its detail panel").weak(),
                    );
                });
            }
        });

        self.apply_actions(ctx, actions);
    }
}
