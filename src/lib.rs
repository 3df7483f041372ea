//! # Stage View: Interactive Pipeline Stage Explorer
//!
//! A desktop widget that presents a data pipeline as a horizontally
//! scrolling row of stage cards. Each card opens a detail panel whose
//! interaction style is selected by the stage's type tag:
//!
//! - **prebuilt** stages edit grouped boolean feature toggles
//! - **configurable** stages edit a preset selector plus value sliders
//! - **custom** stages grow a small node/edge blueprint chain
//!
//! ## Architecture
//!
//! - **Store**: an in-memory, seed-ordered record sequence with at most
//!   one active selection; edits replace only the targeted record
//!   (copy-on-write behind `Arc`)
//! - **Frontend**: eframe/egui panels that return actions instead of
//!   mutating state, applied centrally inside the input handler
//! - **Catalog**: stage records are seeded from an embedded JSON catalog;
//!   swapping that file is the sole configuration surface
//!
//! ## Configuration
//!
//! UI preferences (theme, last catalog path) are stored in the
//! platform-appropriate data directory under `dev.hxyulin.stageview`:
//!
//! - **Linux**: `~/.local/share/dev.hxyulin.stageview/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.stageview/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.stageview\`
//!
//! ## Example
//!
//! ```ignore
//! use stageview_rs::{catalog, config::AppState, frontend::StageViewApp, store::StageStore};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!     let store = StageStore::from_dataset(catalog::builtin())
//!         .expect("built-in stage catalog must validate");
//!
//!     eframe::run_native(
//!         "Stage View",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(StageViewApp::new(cc, store, app_state)))),
//!     )
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod frontend;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::Dataset;
pub use config::AppState;
pub use error::{Result, StageViewError};
pub use frontend::{AppAction, StageViewApp};
pub use store::StageStore;
pub use types::{Blueprint, ModelChoice, StageDetail, StageRecord, ToggleSection, Tuning};
