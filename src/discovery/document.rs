//! Lenient loading of YAML/JSON documents from the checkout

use std::path::Path;

use serde_yaml::Value;

/// Read and parse a YAML (or JSON) file.
///
/// Failures are logged and reported as `None`: a broken file contributes
/// nothing to discovery but never aborts it.
pub fn load_document(path: &Path) -> Option<Value> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("Unable to read file {}: {}", path.display(), err);
            return None;
        }
    };

    match serde_yaml::from_str::<Value>(&contents) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Unable to parse file {}: {}", path.display(), err);
            None
        }
    }
}

/// Render a scalar YAML node as text (`3.0` and `"3.0"` both give `3.0`).
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
