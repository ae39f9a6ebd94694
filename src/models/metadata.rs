//! Governance metadata attached to API definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key marking metadata that lives in another file.
pub const REFERENCE_KEY: &str = "$ref";

/// Free-form governance fields such as `owner`, `team` or `title`.
///
/// May carry a `$ref` pointing at a file (relative to the declaring file)
/// that holds the real metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDefinitionMetadata(Map<String, Value>);

impl ApiDefinitionMetadata {
    /// Convert a parsed YAML node into metadata.
    ///
    /// Returns `None` for null and for anything that is not a mapping.
    pub fn from_yaml(value: serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::Mapping(_) => match serde_yaml::from_value(value) {
                Ok(metadata) => Some(metadata),
                Err(err) => {
                    log::warn!("Unable to read metadata mapping: {}", err);
                    None
                }
            },
            serde_yaml::Value::Null => None,
            other => {
                log::warn!("Ignoring non-mapping metadata: {:?}", other);
                None
            }
        }
    }

    /// Indirection target, when this record only points elsewhere.
    pub fn reference(&self) -> Option<&str> {
        self.get(REFERENCE_KEY)
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty())
    }

    /// The metadata's own `title` field.
    pub fn title(&self) -> Option<&str> {
        self.get("title")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Look up a dotted path such as `owner.team`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let mut current = self.0.get(first)?;
        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ApiDefinitionMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(value: Value) -> ApiDefinitionMetadata {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_yaml_mapping() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("owner: redocly\nteam: core\n").unwrap();
        let meta = ApiDefinitionMetadata::from_yaml(yaml).unwrap();

        assert_eq!(meta.get("owner"), Some(&json!("redocly")));
        assert_eq!(meta.get("team"), Some(&json!("core")));
    }

    #[test]
    fn test_from_yaml_rejects_scalars_and_null() {
        assert!(ApiDefinitionMetadata::from_yaml(serde_yaml::Value::Null).is_none());
        let scalar: serde_yaml::Value = serde_yaml::from_str("just text").unwrap();
        assert!(ApiDefinitionMetadata::from_yaml(scalar).is_none());
    }

    #[test]
    fn test_reference() {
        assert_eq!(
            metadata(json!({"$ref": "../meta.yaml"})).reference(),
            Some("../meta.yaml")
        );
        assert_eq!(metadata(json!({"$ref": ""})).reference(), None);
        assert_eq!(metadata(json!({"owner": "x"})).reference(), None);
    }

    #[test]
    fn test_get_path_nested() {
        let meta = metadata(json!({
            "owner": {"team": "teamA", "members": ["ann", "bob"]},
            "tier": 2
        }));

        assert_eq!(meta.get_path("owner.team"), Some(&json!("teamA")));
        assert_eq!(meta.get_path("owner.members.1"), Some(&json!("bob")));
        assert_eq!(meta.get_path("tier"), Some(&json!(2)));
        assert_eq!(meta.get_path("tier.value"), None);
        assert_eq!(meta.get_path("missing.value"), None);
    }

    #[test]
    fn test_title_ignores_empty() {
        assert_eq!(metadata(json!({"title": "Pets"})).title(), Some("Pets"));
        assert_eq!(metadata(json!({"title": ""})).title(), None);
        assert_eq!(metadata(json!({"title": 3})).title(), None);
    }
}
