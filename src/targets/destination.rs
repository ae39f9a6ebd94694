//! Destination path templating
//!
//! Templates use `{title}`, `{repoId}`, `{orgId}` and `{metadata.<dotted.path>}`
//! placeholders, e.g. `apis/{metadata.team}/{repoId}/{title}`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::models::{ApiDefinitionMetadata, JobContext};

/// Leaf segment appended to destinations of unversioned targets.
pub const LATEST_SEGMENT: &str = "@latest";

static METADATA_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{metadata\.(.+?)\}").expect("valid metadata placeholder regex"));

/// Where a target lands in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Parent folder, shared by targets published together
    pub mount_folder: String,
    /// Last template segment, plus `@latest` for unversioned targets
    pub leaf_name: String,
}

/// Substitute every placeholder in `template`.
///
/// Metadata paths that resolve to nothing render as an empty string. Never fails.
pub fn render_template(
    template: &str,
    title: &str,
    metadata: &ApiDefinitionMetadata,
    job: &JobContext,
) -> String {
    let substituted = template
        .replace("{orgId}", &job.namespace_id)
        .replace("{repoId}", &job.repository_id)
        .replace("{title}", title);

    METADATA_PLACEHOLDER
        .replace_all(&substituted, |caps: &Captures| {
            metadata
                .get_path(&caps[1])
                .map(stringify)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Render the destination of a target from the configured template.
pub fn render_destination(
    template: &str,
    title: &str,
    metadata: &ApiDefinitionMetadata,
    job: &JobContext,
    is_versioned: bool,
) -> Destination {
    let rendered = render_template(template, title, metadata, job);
    let mut segments: Vec<&str> = rendered
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let leaf = segments.pop().unwrap_or_default();
    let leaf_name = if is_versioned {
        leaf.to_string()
    } else if leaf.is_empty() {
        LATEST_SEGMENT.to_string()
    } else {
        format!("{leaf}/{LATEST_SEGMENT}")
    };

    Destination {
        mount_folder: segments.join("/"),
        leaf_name,
    }
}

/// Best-effort text form of a metadata value.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
