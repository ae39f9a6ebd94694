//! Extraction of definitions from root configs and API description files

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::config::DiscoveryRules;
use crate::discovery::document::{load_document, scalar_to_string};
use crate::discovery::paths::{sibling_path, version_root};
use crate::discovery::reference::MetadataResolver;
use crate::error::DiscoveryError;
use crate::models::{ApiDefinitionMetadata, DiscoveredDefinition};

/// Parsed root configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RedoclyConfig {
    /// Kept as a mapping so declaration order survives
    apis: Option<Mapping>,
    metadata: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RedoclyConfigApi {
    root: Option<String>,
    metadata: Option<Value>,
}

/// Turns files into [`DiscoveredDefinition`]s.
#[derive(Debug, Clone)]
pub struct DefinitionExtractor<'a> {
    rules: &'a DiscoveryRules,
    root: &'a Path,
    resolver: MetadataResolver,
}

impl<'a> DefinitionExtractor<'a> {
    /// Extractor for files of the checkout at `root`.
    pub fn new(rules: &'a DiscoveryRules, root: &'a Path) -> Self {
        Self {
            rules,
            root,
            resolver: MetadataResolver::new(rules.max_reference_depth),
        }
    }

    /// Definitions declared by a root configuration file.
    ///
    /// Yields one definition for the config itself when it carries root
    /// metadata, plus one per `apis` entry that has both a `root` and
    /// (own or inherited) metadata.
    pub fn extract_from_config(
        &self,
        config_path: &Path,
    ) -> Result<Vec<DiscoveredDefinition>, DiscoveryError> {
        let Some(document) = load_document(config_path) else {
            return Ok(Vec::new());
        };
        let config: RedoclyConfig = match serde_yaml::from_value(document) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Unable to read config {}: {}", config_path.display(), err);
                return Ok(Vec::new());
            }
        };

        let mut definitions = Vec::new();
        let root_metadata = self
            .resolver
            .resolve(to_metadata(config.metadata), config_path)?
            .metadata
            .filter(|m| !m.is_empty());

        if let Some(metadata) = root_metadata.clone() {
            let title = metadata
                .title()
                .map(str::to_string)
                .unwrap_or_else(|| folder_name(&effective_folder(config_path, self.root)));
            definitions.push(DiscoveredDefinition::new(config_path, title, metadata));
        }

        for (name, entry) in config.apis.unwrap_or_default() {
            let Some(name) = scalar_to_string(&name) else {
                continue;
            };
            let api: RedoclyConfigApi = match serde_yaml::from_value(entry) {
                Ok(api) => api,
                Err(err) => {
                    log::warn!(
                        "Skipping api `{}` in {}: {}",
                        name,
                        config_path.display(),
                        err
                    );
                    continue;
                }
            };

            // entry metadata wins, otherwise inherit the config's root metadata
            let own = to_metadata(api.metadata).filter(|m| !m.is_empty());
            let metadata = match own {
                Some(own) => self
                    .resolver
                    .resolve(Some(own), config_path)?
                    .metadata
                    .filter(|m| !m.is_empty()),
                None => root_metadata.clone(),
            };

            if let (Some(metadata), Some(root)) = (metadata, api.root) {
                let entry_path = sibling_path(config_path, &root);
                let mut definition = DiscoveredDefinition::new(&entry_path, name, metadata);
                definition.empty = !entry_path.is_file();
                if definition.empty {
                    log::warn!("API entry file {} not found", entry_path.display());
                }
                definitions.push(definition);
            }
        }

        Ok(definitions)
    }

    /// A definition for an OpenAPI/Swagger file with a title and metadata.
    ///
    /// Files that do not parse, are not API descriptions, lack a title, or
    /// lack resolvable metadata yield `None`.
    pub fn extract_from_file(
        &self,
        file_path: &Path,
    ) -> Result<Option<DiscoveredDefinition>, DiscoveryError> {
        let Some(document) = load_document(file_path) else {
            return Ok(None);
        };

        if !is_api_description(&document) {
            return Ok(None);
        }

        let info = document.get("info");
        let title = info
            .and_then(|info| info.get("title"))
            .and_then(scalar_to_string)
            .filter(|title| !title.trim().is_empty());
        let embedded = info
            .and_then(|info| info.get(self.rules.metadata_extension.as_str()))
            .cloned();

        let resolved = self.resolver.resolve(to_metadata(embedded), file_path)?;
        if resolved.is_shared(file_path) {
            log::debug!(
                "Metadata for {} comes from {}",
                file_path.display(),
                resolved.resolved_path.display()
            );
        }
        let metadata = resolved.metadata;

        match (title, metadata.filter(|m| !m.is_empty())) {
            (Some(title), Some(metadata)) => {
                Ok(Some(DiscoveredDefinition::new(file_path, title, metadata)))
            }
            _ => {
                log::debug!("Skipping {}: no title or metadata", file_path.display());
                Ok(None)
            }
        }
    }
}

fn is_api_description(document: &Value) -> bool {
    ["openapi", "swagger"].iter().any(|key| {
        document
            .get(*key)
            .and_then(scalar_to_string)
            .is_some_and(|version| !version.is_empty())
    })
}

fn to_metadata(value: Option<Value>) -> Option<ApiDefinitionMetadata> {
    value.and_then(ApiDefinitionMetadata::from_yaml)
}

/// The folder a config speaks for: the owner of its version partition, or its parent.
fn effective_folder(config_path: &Path, root: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
    version_root(parent, root).unwrap_or_else(|| parent.to_path_buf())
}

fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
