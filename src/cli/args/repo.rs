//! Repository checkout arguments shared by the scanning commands

use std::path::PathBuf;

use clap::Args;

use crate::models::JobContext;

/// Which checkout to scan and where to look inside it.
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Path to the repository checkout
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Folder inside the checkout to scan (overrides config `api_folder`)
    #[arg(long, env = "APISCOUT_API_FOLDER", hide_env = true)]
    pub api_folder: Option<String>,
}

/// Identifiers substituted into destination templates.
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Namespace (organization) identifier, used for `{orgId}`
    #[arg(long = "org-id", env = "APISCOUT_ORG_ID", hide_env = true, default_value = "")]
    pub org_id: String,

    /// Repository identifier, used for `{repoId}`
    #[arg(long = "repo-id", env = "APISCOUT_REPO_ID", hide_env = true, default_value = "")]
    pub repo_id: String,

    /// Destination template (overrides config `dest_folder_path`)
    #[arg(long = "dest-path", env = "APISCOUT_DEST_FOLDER_PATH", hide_env = true)]
    pub dest_path: Option<String>,
}

impl JobArgs {
    pub fn job_context(&self) -> JobContext {
        JobContext {
            namespace_id: self.org_id.clone(),
            repository_id: self.repo_id.clone(),
        }
    }
}
