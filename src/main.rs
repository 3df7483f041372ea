//! Stage View - Main Entry Point
//!
//! Interactive explorer for data-pipeline stages: a scrolling card strip
//! with per-type detail panels.

use stageview_rs::{
    catalog::{self, Dataset},
    config::AppState,
    frontend::StageViewApp,
    store::StageStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,stageview_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stage View");

    // Load application state (theme, last catalog)
    let app_state = AppState::load_or_default();

    // Seed the store: the last user-loaded catalog if it still loads,
    // otherwise the built-in one. A malformed built-in catalog is a
    // programming error and fails fast.
    let store = match app_state.last_catalog() {
        Some(path) => match Dataset::load(path).and_then(StageStore::from_dataset) {
            Ok(store) => {
                tracing::info!(path = %path.display(), "restored stage catalog");
                store
            }
            Err(e) => {
                tracing::warn!("Failed to restore last catalog: {e}");
                StageStore::from_dataset(catalog::builtin())
                    .expect("built-in stage catalog must validate")
            }
        },
        None => StageStore::from_dataset(catalog::builtin())
            .expect("built-in stage catalog must validate"),
    };

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([800.0, 520.0])
            .with_title("Stage View"),
        ..Default::default()
    };

    // Run the eframe application
    eframe::run_native(
        "Stage View",
        native_options,
        Box::new(|cc| Ok(Box::new(StageViewApp::new(cc, store, app_state)))),
    )
}
