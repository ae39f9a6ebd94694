//! Grouping targets for upload and listing the files each one carries

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::Result;
use crate::models::{DefinitionUploadTarget, JobContext, UploadTargetType};
use crate::targets::destination::render_template;

/// Entries never uploaded as part of a folder target.
const IGNORED_ENTRIES: &[&str] = &[".git"];

/// Targets that share a remote mount path and are pushed together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadGroup {
    pub remote_mount_path: String,
    pub targets: Vec<DefinitionUploadTarget>,
}

impl UploadGroup {
    /// Render the optional job-context template against the group's first target.
    pub fn job_context(&self, template: Option<&str>, job: &JobContext) -> Option<String> {
        let template = template.filter(|t| !t.trim().is_empty())?;
        let first = self.targets.first()?;
        Some(render_template(template, &first.title, &first.metadata, job))
    }
}

/// Group targets by `remote_mount_path`, in order of first appearance.
pub fn group_by_mount_path(targets: &[DefinitionUploadTarget]) -> Vec<UploadGroup> {
    let mut groups: Vec<UploadGroup> = Vec::new();
    for target in targets {
        match groups
            .iter_mut()
            .find(|g| g.remote_mount_path == target.remote_mount_path)
        {
            Some(group) => group.targets.push(target.clone()),
            None => groups.push(UploadGroup {
                remote_mount_path: target.remote_mount_path.clone(),
                targets: vec![target.clone()],
            }),
        }
    }
    groups
}

/// Files carried by a target, keyed by their name at the destination.
///
/// A file target carries itself under its base name. A folder target carries
/// every file below it under its folder-relative path, skipping `.git`.
pub fn collect_files(target: &DefinitionUploadTarget) -> Result<BTreeMap<String, PathBuf>> {
    let mut files = BTreeMap::new();
    match target.target_type {
        UploadTargetType::File => {
            let name = target
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            files.insert(name, target.source_path.clone());
        }
        UploadTargetType::Folder => {
            let walker = WalkDir::new(&target.source_path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| !is_ignored(entry.path()));
            for entry in walker {
                let entry = entry.map_err(std::io::Error::from)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative = entry
                    .path()
                    .strip_prefix(&target.source_path)
                    .unwrap_or(entry.path());
                files.insert(to_slash(relative), entry.into_path());
            }
        }
    }
    Ok(files)
}

fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| IGNORED_ENTRIES.iter().any(|ignored| name == *ignored))
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiDefinitionMetadata;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn target(source: &Path, mount: &str, kind: UploadTargetType, title: &str) -> DefinitionUploadTarget {
        DefinitionUploadTarget {
            source_path: source.to_path_buf(),
            target_path: format!("{title}/@latest"),
            remote_mount_path: mount.to_string(),
            target_type: kind,
            is_versioned: false,
            title: title.to_string(),
            metadata: serde_json::from_value::<ApiDefinitionMetadata>(json!({"team": "core"})).unwrap(),
        }
    }

    #[test]
    fn test_group_by_mount_path_keeps_first_appearance_order() {
        let targets = vec![
            target(Path::new("/a"), "apis/core", UploadTargetType::Folder, "A"),
            target(Path::new("/b"), "apis/edge", UploadTargetType::Folder, "B"),
            target(Path::new("/c"), "apis/core", UploadTargetType::Folder, "C"),
        ];

        let groups = group_by_mount_path(&targets);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].remote_mount_path, "apis/core");
        let titles: Vec<_> = groups[0].targets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
        assert_eq!(groups[1].targets.len(), 1);
    }

    #[test]
    fn test_job_context() {
        let groups = group_by_mount_path(&[target(Path::new("/a"), "m", UploadTargetType::Folder, "Pets")]);
        let job = JobContext {
            namespace_id: "org".to_string(),
            repository_id: "svc".to_string(),
        };

        assert_eq!(
            groups[0].job_context(Some("{repoId}:{title}:{metadata.team}"), &job),
            Some("svc:Pets:core".to_string())
        );
        assert_eq!(groups[0].job_context(None, &job), None);
        assert_eq!(groups[0].job_context(Some("  "), &job), None);
    }

    #[test]
    fn test_collect_files_for_file_target() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("cats.yaml");
        fs::write(&file, "openapi: 3.0.0\n").unwrap();

        let files = collect_files(&target(&file, "m", UploadTargetType::File, "Cats")).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files.get("cats.yaml"), Some(&file));
    }

    #[test]
    fn test_collect_files_for_folder_target_skips_git() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("specs");
        fs::create_dir_all(root.join("@v1")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("@v1/openapi.yaml"), "").unwrap();
        fs::write(root.join("redocly.yaml"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "").unwrap();

        let files = collect_files(&target(&root, "m", UploadTargetType::Folder, "Specs")).unwrap();

        let names: Vec<_> = files.keys().map(String::as_str).collect();
        assert_eq!(names, ["@v1/openapi.yaml", "redocly.yaml"]);
    }
}
