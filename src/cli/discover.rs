//! Discover command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, RepoArgs};
use crate::discovery::discover;
use crate::error::Result;
use crate::models::DefinitionDisplay;
use crate::output::Formattable;

/// Run the discover command
pub fn run(opts: &GlobalOptions, repo: &RepoArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, repo, None)?;
    let result = discover(&ctx.root, &ctx.config.api_folder, &ctx.config.discovery)?;

    if result.is_api_folder_missing && ctx.format == OutputFormat::Table {
        eprintln!("APIs folder `{}` not found", ctx.config.api_folder);
    }
    debug!(
        "Discovery finished (config present: {})",
        result.has_redocly_config
    );

    let rows: Vec<DefinitionDisplay> = result
        .definitions
        .iter()
        .map(|definition| DefinitionDisplay::from_definition(definition, &ctx.root))
        .collect();
    rows.print(ctx.format)
}
