//! Stage catalog loading
//!
//! The application ships with a built-in catalog embedded at compile
//! time. Swapping the catalog for another JSON file is the sole
//! configuration surface: there are no environment variables or flags.
//!
//! A catalog that fails to parse is rejected as a whole; in particular an
//! unrecognized stage `type` tag is a data error that surfaces at load
//! time, never as a runtime rendering condition.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ResultExt, StageViewError};
use crate::types::StageRecord;

/// The built-in stage catalog, checked into the repository
const BUILTIN_CATALOG: &str = include_str!("../assets/stages.json");

/// A loaded stage catalog in seed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub stages: Vec<StageRecord>,
}

impl Dataset {
    /// Load a catalog from a JSON file chosen by the user
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(StageViewError::from)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    /// Parse a catalog from JSON text
    pub fn parse(contents: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(contents)?;
        if dataset.stages.is_empty() {
            return Err(StageViewError::Catalog(
                "catalog contains no stages".to_string(),
            ));
        }
        Ok(dataset)
    }
}

/// The built-in catalog. Shipping a malformed catalog is a programming
/// error, so this fails fast at startup rather than returning a Result.
pub fn builtin() -> Dataset {
    Dataset::parse(BUILTIN_CATALOG).expect("built-in stage catalog must parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StageDetail;

    #[test]
    fn test_builtin_catalog_parses() {
        let dataset = builtin();
        assert_eq!(dataset.stages.len(), 4);
        assert_eq!(dataset.stages[1].id, "etl");
    }

    #[test]
    fn test_builtin_catalog_covers_all_three_types() {
        let dataset = builtin();
        let labels: Vec<_> = dataset.stages.iter().map(|s| s.type_label()).collect();
        assert!(labels.contains(&"prebuilt"));
        assert!(labels.contains(&"configurable"));
        assert!(labels.contains(&"custom"));
    }

    #[test]
    fn test_builtin_advanced_preset_mapping() {
        let dataset = builtin();
        let etl = dataset.stages.iter().find(|s| s.id == "etl").unwrap();
        let StageDetail::Configurable { tuning, .. } = &etl.detail else {
            panic!("etl must be configurable");
        };
        let advanced = tuning.preset_named("Advanced").unwrap();
        assert_eq!(advanced.values["freshness"], 85);
        assert_eq!(advanced.values["transform_depth"], 80);
        assert_eq!(advanced.values["validation"], 85);
        assert_eq!(advanced.values["cost_control"], 55);
        assert_eq!(advanced.values["change_handling"], 80);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(Dataset::parse(r#"{ "stages": [] }"#).is_err());
    }

    #[test]
    fn test_unknown_stage_type_rejected() {
        let json = r#"{ "stages": [ {
            "id": "x", "title": "X", "one_liner": "x",
            "type": "holographic", "sections": []
        } ] }"#;
        assert!(Dataset::parse(json).is_err());
    }
}
