//! Local metadata validation and the summary reported back on a commit
//!
//! Schema validation of metadata happens in the catalog backend; this module
//! only checks what the destination template needs, and renders the
//! markdown summary posted as a commit comment/status.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::config::ScoutConfig;
use crate::models::{ApiDefinitionMetadata, DefinitionDiscoveryResult, DiscoveredDefinition};

static METADATA_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{metadata\.(.+?)\}").expect("valid metadata variable regex"));

/// Name of the commit check this tool reports under.
pub const CHECK_NAME: &str = "Redocly Scout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionValidationResult {
    pub definition: DiscoveredDefinition,
    pub result: ValidationResult,
}

/// Commit check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub message: String,
    pub details: String,
    pub status: CheckStatus,
}

/// Check that every `{metadata.<path>}` used by `template` has a scalar value.
pub fn validate_metadata(template: &str, metadata: &ApiDefinitionMetadata) -> ValidationResult {
    let mut missing = Vec::new();
    let mut objects = Vec::new();

    for caps in METADATA_VARIABLE.captures_iter(template) {
        let field = &caps[1];
        match metadata.get_path(field) {
            None | Some(Value::Null) => missing.push(field.to_string()),
            Some(Value::Object(_)) | Some(Value::Array(_)) => objects.push(field.to_string()),
            Some(_) => {}
        }
    }

    let errors: Vec<ValidationError> = missing
        .iter()
        .map(|field| ValidationError {
            message: format!("\"{field}\" metadata attribute is required"),
        })
        .chain(objects.iter().map(|field| ValidationError {
            message: format!("\"{field}\" metadata attribute should not be an object"),
        }))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validate every definition against the destination template.
pub fn validate_definitions(
    template: &str,
    definitions: &[DiscoveredDefinition],
) -> Vec<DefinitionValidationResult> {
    definitions
        .iter()
        .map(|definition| {
            let result = validate_metadata(template, &definition.metadata);
            log::debug!("Metadata validated for {}", definition.path.display());
            DefinitionValidationResult {
                definition: definition.clone(),
                result,
            }
        })
        .collect()
}

/// Summarize validation results for a commit.
pub fn validation_summary(
    results: &[DefinitionValidationResult],
    discovery: &DefinitionDiscoveryResult,
    commit_sha: &str,
    root: &Path,
    config: &ScoutConfig,
) -> ValidationSummary {
    let header = format!("### Redocly scout\n\nCommit: {commit_sha}\n\n## Metadata validation\n\n");

    if !results.is_empty() {
        let success = results.iter().all(|r| r.result.is_valid);
        let details: Vec<String> = results.iter().map(|r| result_message(r, root)).collect();
        return ValidationSummary {
            message: format!(
                "Metadata validation {}",
                if success { "successful" } else { "failed" }
            ),
            details: format!("{header}{}", details.join("\n\n")),
            status: if success {
                CheckStatus::Succeeded
            } else {
                CheckStatus::Failed
            },
        };
    }

    let folder_missing = format!("{header}APIs folder `{}` not found", config.api_folder);

    if !config.metadata_required {
        return ValidationSummary {
            message: "Metadata validation skipped".to_string(),
            details: if discovery.is_api_folder_missing {
                folder_missing
            } else {
                format!("{header}APIs not found")
            },
            status: CheckStatus::Succeeded,
        };
    }

    if discovery.is_api_folder_missing {
        return ValidationSummary {
            message: "APIs folder not found".to_string(),
            details: folder_missing,
            status: CheckStatus::Failed,
        };
    }

    let missing = if discovery.has_redocly_config {
        "metadata.yaml".to_string()
    } else {
        format!("{} file", config.discovery.config_filename)
    };
    ValidationSummary {
        message: format!("{missing} not found"),
        details: format!("{header}{missing} not found"),
        status: CheckStatus::Failed,
    }
}

fn result_message(result: &DefinitionValidationResult, root: &Path) -> String {
    let path = result
        .definition
        .path
        .strip_prefix(root)
        .unwrap_or(result.definition.path.as_path())
        .display()
        .to_string();
    let warning = if result.definition.empty {
        "\n\n>[!WARNING]\n>API spec file not found"
    } else {
        ""
    };

    if result.result.is_valid {
        return format!("**{path}** ✅{warning}");
    }

    let errors = serde_json::to_string_pretty(&result.result.errors).unwrap_or_default();
    format!(
        "<details><summary><b>{path}</b> ❌</summary>\n\n```json\n{errors}\n```\n</details>{warning}"
    )
}
