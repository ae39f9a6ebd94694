//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod discover;
pub mod targets;
pub mod validate;

pub use args::{GlobalOptions, JobArgs, OutputFormat, RepoArgs};
pub use context::CommandContext;

/// apiscout - find API definitions in a repository and plan their publication
#[derive(Parser, Debug)]
#[command(name = "apiscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "APISCOUT_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "APISCOUT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "APISCOUT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List API definitions discovered in a checkout
    Discover {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Show the consolidated upload targets and their destinations
    Targets {
        #[command(flatten)]
        repo: RepoArgs,

        #[command(flatten)]
        job: JobArgs,

        /// List the files carried by each upload group
        #[arg(long)]
        files: bool,
    },

    /// Validate definition metadata and print the commit summary
    Validate {
        #[command(flatten)]
        repo: RepoArgs,

        #[command(flatten)]
        job: JobArgs,

        /// Commit being validated
        #[arg(long = "commit-sha", env = "APISCOUT_COMMIT_SHA", hide_env = true, default_value = "HEAD")]
        commit_sha: String,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   apiscout completion bash > /etc/bash_completion.d/apiscout
  zsh:    apiscout completion zsh > \"${fpath[1]}/_apiscout\"
  fish:   apiscout completion fish > ~/.config/fish/completions/apiscout.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
