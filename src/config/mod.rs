//! Configuration management for apiscout

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default destination template for published definitions
pub const DEFAULT_DEST_FOLDER_PATH: &str = "apis/{metadata.team}/{repoId}/{title}";

static TEMPLATE_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.+?)\}").expect("valid template variable regex"));

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Destination template, e.g. `apis/{metadata.team}/{repoId}/{title}`
    pub dest_folder_path: String,

    /// Folder inside the repository that is scanned for definitions
    pub api_folder: String,

    /// Optional template rendered once per upload group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_context: Option<String>,

    /// Fail validation when a repository publishes no definitions
    pub metadata_required: bool,

    /// File classification rules
    pub discovery: DiscoveryRules,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            dest_folder_path: DEFAULT_DEST_FOLDER_PATH.to_string(),
            api_folder: "/".to_string(),
            job_context: None,
            metadata_required: false,
            discovery: DiscoveryRules::default(),
        }
    }
}

/// Reserved names and limits used while walking a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryRules {
    /// Base name of root configuration files
    pub config_filename: String,

    /// Extensions of candidate API description files
    pub definition_extensions: Vec<String>,

    /// Field on the `info` object carrying embedded metadata
    pub metadata_extension: String,

    /// Longest `$ref` chain followed before giving up
    pub max_reference_depth: usize,
}

impl Default for DiscoveryRules {
    fn default() -> Self {
        Self {
            config_filename: "redocly.yaml".to_string(),
            definition_extensions: vec!["json".to_string(), "yaml".to_string(), "yml".to_string()],
            metadata_extension: "x-metadata".to_string(),
            max_reference_depth: 32,
        }
    }
}

impl ScoutConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".apiscout").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default path when present.
    ///
    /// A missing default file falls back to built-in defaults; a missing
    /// explicit file is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(Path::new(path)),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ScoutConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the loaded values
    pub fn validate(&self) -> Result<()> {
        validate_destination_path(&self.dest_folder_path)?;
        if self.discovery.config_filename.trim().is_empty() {
            return Err(ConfigError::Invalid("discovery.config_filename is empty".to_string()).into());
        }
        if self.discovery.max_reference_depth == 0 {
            return Err(
                ConfigError::Invalid("discovery.max_reference_depth must be positive".to_string())
                    .into(),
            );
        }
        Ok(())
    }
}

/// Check that every `{variable}` in a destination template is supported.
pub fn validate_destination_path(template: &str) -> std::result::Result<(), ConfigError> {
    for caps in TEMPLATE_VARIABLE.captures_iter(template) {
        let variable = &caps[1];
        if !is_valid_destination_variable(variable) {
            return Err(ConfigError::InvalidDestinationVariable(variable.to_string()));
        }
    }
    Ok(())
}

fn is_valid_destination_variable(variable: &str) -> bool {
    variable.starts_with("metadata.") || matches!(variable, "title" | "repoId" | "orgId")
}
