//! Validate command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, JobArgs, OutputFormat, RepoArgs};
use crate::discovery::discover;
use crate::error::{Error, Result};
use crate::output::json::format_json;
use crate::validation::{CHECK_NAME, CheckStatus, validate_definitions, validation_summary};

/// Run the validate command; fails when the summary status is FAILED.
pub fn run(opts: &GlobalOptions, repo: &RepoArgs, job: &JobArgs, commit_sha: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, repo, Some(job))?;
    let discovery = discover(&ctx.root, &ctx.config.api_folder, &ctx.config.discovery)?;

    let results = validate_definitions(&ctx.config.dest_folder_path, &discovery.definitions);
    let summary = validation_summary(&results, &discovery, commit_sha, &ctx.root, &ctx.config);

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&summary)?),
        OutputFormat::Table => {
            let status = match summary.status {
                CheckStatus::Succeeded => "✓".green(),
                CheckStatus::Failed => "✗".red(),
            };
            println!("{} {}: {}\n", status, CHECK_NAME.bold(), summary.message);
            println!("{}", summary.details);
        }
    }

    if summary.status == CheckStatus::Failed {
        return Err(Error::Other(summary.message));
    }
    Ok(())
}
