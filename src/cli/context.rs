//! Command execution context
//!
//! Loads configuration, applies CLI overrides, and resolves the checkout
//! root so handlers only deal with the command itself.

use std::path::PathBuf;

use log::debug;

use crate::cli::{GlobalOptions, JobArgs, OutputFormat, RepoArgs};
use crate::config::ScoutConfig;
use crate::error::{Error, Result};
use crate::models::JobContext;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: ScoutConfig,
    /// Absolute path of the checkout
    pub root: PathBuf,
    /// Template identifiers of the job
    pub job: JobContext,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build a context for a scanning command.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, an override is invalid, or
    /// the checkout root does not exist.
    pub fn new(opts: &GlobalOptions, repo: &RepoArgs, job: Option<&JobArgs>) -> Result<Self> {
        let mut config = ScoutConfig::load_at(opts.config_ref())?;

        if let Some(api_folder) = &repo.api_folder {
            config.api_folder = api_folder.clone();
        }
        if let Some(dest_path) = job.and_then(|j| j.dest_path.as_ref()) {
            config.dest_folder_path = dest_path.clone();
        }
        config.validate()?;

        let root = std::fs::canonicalize(&repo.root).map_err(|err| {
            Error::Other(format!("Cannot open checkout {}: {}", repo.root.display(), err))
        })?;
        debug!("Using checkout {} (api folder {})", root.display(), config.api_folder);

        Ok(Self {
            config,
            root,
            job: job.map(JobArgs::job_context).unwrap_or_default(),
            format: opts.format,
        })
    }
}
