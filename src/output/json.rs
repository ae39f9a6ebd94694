//! JSON output formatting
//!
//! Every JSON document is `{ "data": ..., "meta": {...} }`. Listings also
//! carry the number of rows in `meta.count`.

use chrono::Utc;
use serde::Serialize;

/// Payload plus run metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub tool: &'static str,
    pub version: &'static str,
    /// RFC 3339 time the output was produced
    pub timestamp: String,
    /// Row count, for listings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Metadata {
    fn now(count: Option<usize>) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now().to_rfc3339(),
            count,
        }
    }
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata::now(None),
        }
    }

    pub fn listing(data: T, count: usize) -> Self {
        Self {
            data,
            meta: Metadata::now(Some(count)),
        }
    }
}

/// Pretty-print a single document, such as a validation summary.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Pretty-print a listing of rows.
pub fn format_json_rows<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::listing(rows, rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DefinitionDisplay, DiscoveredDefinition, UploadFileDisplay};
    use crate::validation::{CheckStatus, ValidationSummary};
    use serde_json::{Value, json};
    use std::path::Path;

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_definition_rows_carry_count() {
        let definition = DiscoveredDefinition::new(
            "/work/apis/pets.yaml",
            "Pets",
            serde_json::from_value(json!({"team": "core"})).unwrap(),
        );
        let rows = vec![DefinitionDisplay::from_definition(&definition, Path::new("/work"))];

        let output = parse(&format_json_rows(&rows).unwrap());

        assert_eq!(output["data"][0]["path"], "apis/pets.yaml");
        assert_eq!(output["data"][0]["missing"], false);
        assert_eq!(output["meta"]["count"], 1);
        assert_eq!(output["meta"]["tool"], "apiscout");
        assert_eq!(output["meta"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_empty_listing() {
        let rows: Vec<UploadFileDisplay> = vec![];

        let output = parse(&format_json_rows(&rows).unwrap());

        assert_eq!(output["data"], json!([]));
        assert_eq!(output["meta"]["count"], 0);
    }

    #[test]
    fn test_summary_has_no_count() {
        let summary = ValidationSummary {
            message: "Metadata validation skipped".to_string(),
            details: "### Redocly scout".to_string(),
            status: CheckStatus::Succeeded,
        };

        let output = parse(&format_json(&summary).unwrap());

        assert_eq!(output["data"]["status"], "SUCCEEDED");
        assert!(output["meta"].get("count").is_none());
        assert!(output["meta"]["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }
}
