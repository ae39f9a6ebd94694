//! Upload target models

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::ApiDefinitionMetadata;

/// Granularity of an upload target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadTargetType {
    File,
    Folder,
}

impl fmt::Display for UploadTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadTargetType::File => write!(f, "file"),
            UploadTargetType::Folder => write!(f, "folder"),
        }
    }
}

/// Where a single definition would be published from, before consolidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTargetConfig {
    pub path: PathBuf,
    pub target_type: UploadTargetType,
    pub is_versioned: bool,
}

/// A filesystem unit selected for publication, with its destination.
///
/// Surviving targets never nest: no `source_path` lies inside another's.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionUploadTarget {
    pub source_path: PathBuf,
    /// Destination leaf, e.g. `Petstore/@latest`
    pub target_path: String,
    /// Destination parent shared by targets uploaded together
    pub remote_mount_path: String,
    #[serde(rename = "type")]
    pub target_type: UploadTargetType,
    pub is_versioned: bool,
    pub title: String,
    pub metadata: ApiDefinitionMetadata,
}

impl DefinitionUploadTarget {
    /// Full destination path (`remote_mount_path/target_path`)
    pub fn mount_path(&self) -> String {
        if self.remote_mount_path.is_empty() {
            self.target_path.clone()
        } else {
            format!("{}/{}", self.remote_mount_path, self.target_path)
        }
    }
}

/// Repository/namespace identifiers of the job being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    pub namespace_id: String,
    pub repository_id: String,
}
