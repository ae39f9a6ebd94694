//! Upload target display models

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use super::relative_display;
use crate::models::DefinitionUploadTarget;

/// Upload target row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UploadTargetDisplay {
    #[tabled(rename = "SOURCE")]
    pub source: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub target_type: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Full destination (`mount/leaf`)
    #[tabled(rename = "DESTINATION")]
    pub destination: String,

    #[tabled(rename = "VERSIONED")]
    pub versioned: bool,
}

impl UploadTargetDisplay {
    pub fn from_target(target: &DefinitionUploadTarget, root: &Path) -> Self {
        Self {
            source: relative_display(&target.source_path, root),
            target_type: target.target_type.to_string(),
            title: target.title.clone(),
            destination: target.mount_path(),
            versioned: target.is_versioned,
        }
    }
}

/// One file carried by an upload group.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UploadFileDisplay {
    /// Shared remote mount path of the group
    #[tabled(rename = "MOUNT")]
    pub mount: String,

    /// Name under the mount, prefixed by the target leaf
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,
}
