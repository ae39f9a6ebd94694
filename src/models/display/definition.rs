//! Discovered definition display model

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use super::relative_display;
use crate::models::DiscoveredDefinition;

/// Discovered definition row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DefinitionDisplay {
    /// Path relative to the checkout
    #[tabled(rename = "PATH")]
    pub path: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Compact JSON form of the resolved metadata
    #[tabled(rename = "METADATA")]
    pub metadata: String,

    /// Entry file declared in a config but missing on disk
    #[tabled(rename = "MISSING")]
    pub missing: bool,
}

impl DefinitionDisplay {
    pub fn from_definition(definition: &DiscoveredDefinition, root: &Path) -> Self {
        Self {
            path: relative_display(&definition.path, root),
            title: definition.title.clone(),
            metadata: serde_json::to_string(&definition.metadata).unwrap_or_else(|_| "--".to_string()),
            missing: definition.empty,
        }
    }
}
