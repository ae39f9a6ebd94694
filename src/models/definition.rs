//! Discovered API definition models

use std::path::PathBuf;

use serde::Serialize;

use super::ApiDefinitionMetadata;

/// An API description file, or a config-declared API, with resolved metadata.
///
/// Identity is `path`; a discovery run never yields two definitions with the
/// same path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredDefinition {
    /// Absolute path of the definition (or of the config file that declares it)
    pub path: PathBuf,

    /// Display title
    pub title: String,

    /// Resolved governance metadata
    pub metadata: ApiDefinitionMetadata,

    /// Set when a config entry points at an entry file that does not exist
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub empty: bool,
}

impl DiscoveredDefinition {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>, metadata: ApiDefinitionMetadata) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            metadata,
            empty: false,
        }
    }
}

/// Outcome of a discovery run over one repository checkout.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionDiscoveryResult {
    /// The configured API folder does not exist in the checkout
    pub is_api_folder_missing: bool,

    /// At least one root configuration file was seen
    pub has_redocly_config: bool,

    /// Definitions in discovery order
    pub definitions: Vec<DiscoveredDefinition>,
}

impl DefinitionDiscoveryResult {
    pub fn api_folder_missing() -> Self {
        Self {
            is_api_folder_missing: true,
            ..Self::default()
        }
    }
}
