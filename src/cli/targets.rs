//! Targets command implementation

use crate::cli::{CommandContext, GlobalOptions, JobArgs, OutputFormat, RepoArgs};
use crate::discovery::discover;
use crate::error::Result;
use crate::models::{DefinitionUploadTarget, UploadFileDisplay, UploadTargetDisplay};
use crate::output::Formattable;
use crate::targets::{collect_files, convert_to_upload_targets, group_by_mount_path};

/// Run the targets command
pub fn run(opts: &GlobalOptions, repo: &RepoArgs, job: &JobArgs, files: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, repo, Some(job))?;
    let result = discover(&ctx.root, &ctx.config.api_folder, &ctx.config.discovery)?;

    if result.is_api_folder_missing && ctx.format == OutputFormat::Table {
        eprintln!("APIs folder `{}` not found", ctx.config.api_folder);
    }

    let targets = convert_to_upload_targets(
        &result.definitions,
        &ctx.job,
        &ctx.root,
        &ctx.config.dest_folder_path,
        &ctx.config.discovery,
    );

    if files {
        return print_upload_files(&ctx, &targets);
    }

    let rows: Vec<UploadTargetDisplay> = targets
        .iter()
        .map(|target| UploadTargetDisplay::from_target(target, &ctx.root))
        .collect();
    rows.print(ctx.format)
}

fn print_upload_files(ctx: &CommandContext, targets: &[DefinitionUploadTarget]) -> Result<()> {
    let mut rows = Vec::new();
    for group in group_by_mount_path(targets) {
        if let Some(job_context) = group.job_context(ctx.config.job_context.as_deref(), &ctx.job) {
            log::info!("Job context for {}: {}", group.remote_mount_path, job_context);
        }
        for target in &group.targets {
            for (name, source) in collect_files(target)? {
                rows.push(UploadFileDisplay {
                    mount: group.remote_mount_path.clone(),
                    name: format!("{}/{}", target.target_path, name),
                    source: crate::models::display::relative_display(&source, &ctx.root),
                });
            }
        }
    }
    rows.print(ctx.format)
}
