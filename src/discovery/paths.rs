//! Path-segment helpers for version folders and target nesting

use std::path::{Component, Path, PathBuf};

/// Marker that turns a path segment into a version partition (`@v1`).
pub const VERSION_MARKER: char = '@';

/// Whether a single path segment names a version partition.
pub fn is_version_segment(segment: &str) -> bool {
    segment.contains(VERSION_MARKER)
}

/// The folder that owns a version-partitioned path inside `root`.
///
/// Only the segments of `path` below `root` are inspected, so a checkout
/// living under an `@` directory is not itself treated as versioned.
/// Returns `root` joined with the segments before the first version
/// segment, or `None` when no segment is a version partition.
///
/// `/repo/specs/@v2/dogs` under `/repo` yields `/repo/specs`.
pub fn version_root(path: &Path, root: &Path) -> Option<PathBuf> {
    let (base, relative) = match path.strip_prefix(root) {
        Ok(relative) => (root.to_path_buf(), relative),
        Err(_) => (PathBuf::new(), path),
    };
    let mut owner = base;
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            if is_version_segment(&segment.to_string_lossy()) {
                return Some(owner);
            }
        }
        owner.push(component.as_os_str());
    }
    None
}

/// Whether `path`, taken relative to `root`, is the repository root itself.
pub fn is_root_folder(path: &Path, root: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return true;
    }
    match path.strip_prefix(root) {
        Ok(relative) => relative.components().all(|c| matches!(c, Component::CurDir)),
        Err(_) => false,
    }
}

/// Whether `path` lies strictly inside `parent` (segment-wise, not by string prefix).
pub fn is_strictly_within(path: &Path, parent: &Path) -> bool {
    path != parent && path.starts_with(parent)
}

/// Lexically resolve `.` and `..` segments without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve `relative` against the directory containing `file`.
pub fn sibling_path(file: &Path, relative: &str) -> PathBuf {
    let base = file.parent().unwrap_or_else(|| Path::new(""));
    normalize(&base.join(relative))
}
