//! Panel dispatch — maps a stage's payload to its renderer variant.
//!
//! The mapping is a pure, exhaustive match over the closed payload enum.
//! There is deliberately no default arm: an unknown stage type cannot
//! survive catalog loading, so reaching here with one is impossible.

use crate::types::StageDetail;

/// The three detail-panel variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    GroupedToggles,
    Tuning,
    Blueprint,
}

impl PanelKind {
    /// Display name shown in the detail header
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::GroupedToggles => "Feature toggles",
            PanelKind::Tuning => "Tuning",
            PanelKind::Blueprint => "Blueprint",
        }
    }
}

/// Select the renderer variant for a stage payload
pub fn panel_for(detail: &StageDetail) -> PanelKind {
    match detail {
        StageDetail::Prebuilt { .. } => PanelKind::GroupedToggles,
        StageDetail::Configurable { .. } => PanelKind::Tuning,
        StageDetail::Custom { .. } => PanelKind::Blueprint,
    }
}
