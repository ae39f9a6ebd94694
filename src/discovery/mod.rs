//! API definition discovery
//!
//! Walks a repository checkout, classifies files, and extracts
//! [`DiscoveredDefinition`]s from root configs and API description files.
//!
//! Definitions are keyed by path and the first definition seen for a path
//! wins. Because a root config is extracted as soon as it is visited, the
//! metadata it declares for a file takes precedence over the file's own
//! metadata when the config is walked first.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::DiscoveryRules;
use crate::error::DiscoveryError;
use crate::models::{DefinitionDiscoveryResult, DiscoveredDefinition};

pub mod document;
pub mod extract;
pub mod paths;
pub mod reference;
pub mod walker;

pub use extract::DefinitionExtractor;
pub use walker::{FileClassifier, FileKind, list_files};

/// Insertion-ordered definitions where the first entry for a path wins.
#[derive(Debug, Default)]
struct FirstWins {
    seen: HashSet<PathBuf>,
    definitions: Vec<DiscoveredDefinition>,
}

impl FirstWins {
    fn insert(&mut self, definition: DiscoveredDefinition) {
        if self.seen.insert(definition.path.clone()) {
            self.definitions.push(definition);
        } else {
            debug!("Keeping earlier definition for {}", definition.path.display());
        }
    }
}

/// Resolve the folder to scan; a leading `/` in `api_folder` is relative to the checkout.
pub fn api_folder_path(root: &Path, api_folder: &str) -> PathBuf {
    paths::normalize(&root.join(api_folder.trim_start_matches('/')))
}

/// Discover every publishable definition under `root/api_folder`.
///
/// A missing folder is reported through `is_api_folder_missing`, not as an
/// error. Only metadata reference cycles (or over-long chains) fail the run.
pub fn discover(
    root: &Path,
    api_folder: &str,
    rules: &DiscoveryRules,
) -> Result<DefinitionDiscoveryResult, DiscoveryError> {
    let folder = api_folder_path(root, api_folder);
    if !folder.is_dir() {
        info!("API folder {} not found", folder.display());
        return Ok(DefinitionDiscoveryResult::api_folder_missing());
    }

    let classifier = FileClassifier::new(rules);
    let extractor = DefinitionExtractor::new(rules, root);
    let mut has_redocly_config = false;
    let mut definitions = FirstWins::default();

    let files = list_files(&folder);
    debug!("Scanning {} files under {}", files.len(), folder.display());

    for file in files {
        match classifier.classify(&file) {
            FileKind::RootConfig => {
                has_redocly_config = true;
                for definition in extractor.extract_from_config(&file)? {
                    definitions.insert(definition);
                }
            }
            FileKind::Definition => {
                if let Some(definition) = extractor.extract_from_file(&file)? {
                    definitions.insert(definition);
                }
            }
            FileKind::Irrelevant => {}
        }
    }

    info!(
        "Discovered {} definitions under {}",
        definitions.definitions.len(),
        folder.display()
    );

    Ok(DefinitionDiscoveryResult {
        is_api_folder_missing: false,
        has_redocly_config,
        definitions: definitions.definitions,
    })
}
