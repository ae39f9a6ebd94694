//! Upload target consolidation
//!
//! Turns discovered definitions into the smallest set of files and folders
//! that must be published, then attaches a destination to each.
//!
//! Each definition is classified by strict priority:
//! 1. inside a version folder (`specs/@v2/...`) -> the folder owning the
//!    versions, unless that is the repository root (skipped)
//! 2. a root config file -> its folder
//! 3. sharing its folder with other definitions -> the file itself
//! 4. otherwise -> its folder
//!
//! Targets are keyed by source path with the last definition winning, and
//! any target nested inside another target is dropped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::DiscoveryRules;
use crate::discovery::FileClassifier;
use crate::discovery::paths::{is_root_folder, is_strictly_within, version_root};
use crate::models::{
    DefinitionUploadTarget, DiscoveredDefinition, JobContext, UploadTargetConfig, UploadTargetType,
};

pub mod destination;
pub mod files;

pub use destination::render_destination;
pub use files::{collect_files, group_by_mount_path};

/// A consolidated target and the definition it was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedTarget<'a> {
    pub config: UploadTargetConfig,
    pub definition: &'a DiscoveredDefinition,
}

/// Decide where a single definition would be published from.
///
/// Returns `None` for definitions in a version folder at the repository root.
pub fn upload_target_config(
    definition: &DiscoveredDefinition,
    definitions: &[DiscoveredDefinition],
    root: &Path,
    classifier: &FileClassifier<'_>,
) -> Option<UploadTargetConfig> {
    let folder = parent_folder(&definition.path);

    if let Some(versions_owner) = version_root(&folder, root) {
        if is_root_folder(&versions_owner, root) {
            debug!(
                "Skipping {}: version folders at the repository root are not publishable",
                definition.path.display()
            );
            return None;
        }
        return Some(UploadTargetConfig {
            path: versions_owner,
            target_type: UploadTargetType::Folder,
            is_versioned: true,
        });
    }

    if classifier.is_root_config(&definition.path) {
        return Some(folder_target(folder));
    }

    if is_multi_definition_folder(&folder, definitions) {
        return Some(UploadTargetConfig {
            path: definition.path.clone(),
            target_type: UploadTargetType::File,
            is_versioned: false,
        });
    }

    Some(folder_target(folder))
}

/// Consolidate definitions into non-overlapping targets.
///
/// Targets for the same source path keep the position of the first one but
/// the content of the last one.
pub fn plan_targets<'a>(
    definitions: &'a [DiscoveredDefinition],
    root: &Path,
    rules: &DiscoveryRules,
) -> Vec<PlannedTarget<'a>> {
    let classifier = FileClassifier::new(rules);
    let mut index: HashMap<PathBuf, usize> = HashMap::new();
    let mut planned: Vec<PlannedTarget<'a>> = Vec::new();

    for definition in definitions {
        let Some(config) = upload_target_config(definition, definitions, root, &classifier) else {
            continue;
        };
        let target = PlannedTarget { config, definition };
        match index.get(&target.config.path) {
            Some(&position) => planned[position] = target,
            None => {
                index.insert(target.config.path.clone(), planned.len());
                planned.push(target);
            }
        }
    }

    let sources: Vec<PathBuf> = planned.iter().map(|t| t.config.path.clone()).collect();
    planned
        .into_iter()
        .filter(|target| {
            let nested = sources
                .iter()
                .any(|other| is_strictly_within(&target.config.path, other));
            if nested {
                debug!(
                    "Dropping {}: covered by a parent target",
                    target.config.path.display()
                );
            }
            !nested
        })
        .collect()
}

/// Consolidate definitions and attach destinations rendered from `template`.
pub fn convert_to_upload_targets(
    definitions: &[DiscoveredDefinition],
    job: &JobContext,
    root: &Path,
    template: &str,
    rules: &DiscoveryRules,
) -> Vec<DefinitionUploadTarget> {
    plan_targets(definitions, root, rules)
        .into_iter()
        .map(|planned| {
            let definition = planned.definition;
            let destination = render_destination(
                template,
                &definition.title,
                &definition.metadata,
                job,
                planned.config.is_versioned,
            );
            DefinitionUploadTarget {
                source_path: planned.config.path,
                target_path: destination.leaf_name,
                remote_mount_path: destination.mount_folder,
                target_type: planned.config.target_type,
                is_versioned: planned.config.is_versioned,
                title: definition.title.clone(),
                metadata: definition.metadata.clone(),
            }
        })
        .collect()
}

fn parent_folder(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn folder_target(path: PathBuf) -> UploadTargetConfig {
    UploadTargetConfig {
        path,
        target_type: UploadTargetType::Folder,
        is_versioned: false,
    }
}

fn is_multi_definition_folder(folder: &Path, definitions: &[DiscoveredDefinition]) -> bool {
    definitions
        .iter()
        .filter(|d| d.path.parent() == Some(folder))
        .take(2)
        .count()
        > 1
}
