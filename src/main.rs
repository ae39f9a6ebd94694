//! apiscout - discovers API definitions in a repository checkout and plans
//! their publication to an API catalog

use clap::Parser;

mod cli;
mod config;
mod discovery;
mod error;
mod models;
mod output;
mod targets;
mod validation;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if debug {
        builder.filter_module("apiscout", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Discover { repo } => cli::discover::run(&opts, &repo),
        Commands::Targets { repo, job, files } => cli::targets::run(&opts, &repo, &job, files),
        Commands::Validate {
            repo,
            job,
            commit_sha,
        } => cli::validate::run(&opts, &repo, &job, &commit_sha),
        Commands::Version => {
            println!("apiscout version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
