//! Repository tree walking and file classification

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::DiscoveryRules;

/// What a file means to discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Reserved root configuration file (e.g. `redocly.yaml`)
    RootConfig,
    /// File with an allowed API description extension
    Definition,
    Irrelevant,
}

/// Classifies files using injected [`DiscoveryRules`].
#[derive(Debug, Clone)]
pub struct FileClassifier<'a> {
    rules: &'a DiscoveryRules,
}

impl<'a> FileClassifier<'a> {
    pub fn new(rules: &'a DiscoveryRules) -> Self {
        Self { rules }
    }

    pub fn classify(&self, path: &Path) -> FileKind {
        if self.is_root_config(path) {
            FileKind::RootConfig
        } else if self.is_definition_candidate(path) {
            FileKind::Definition
        } else {
            FileKind::Irrelevant
        }
    }

    pub fn is_root_config(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy() == self.rules.config_filename)
    }

    pub fn is_definition_candidate(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| {
            let ext = ext.to_string_lossy();
            self.rules
                .definition_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
        })
    }
}

/// Every file below `root`, recursively, in a stable (name-sorted) order.
///
/// Symlinks are not followed, so nothing outside the tree is listed.
/// Unreadable entries are logged and skipped. A missing root yields nothing.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
