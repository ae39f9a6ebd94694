//! Display models for table and JSON output
//!
//! Display models flatten domain types into CLI-friendly rows, with paths
//! shown relative to the repository checkout.

use std::path::Path;

mod definition;
mod target;

pub use definition::DefinitionDisplay;
pub use target::{UploadFileDisplay, UploadTargetDisplay};

/// Render `path` relative to `root`, or as-is when it lies elsewhere.
pub(crate) fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
