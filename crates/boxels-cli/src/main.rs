//! Boxels CLI
//!
//! Resolves the project configuration, layers the command-line flags on
//! top and hands the result to the build engine.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use boxels_config::{ConfigCache, ConfigResolver, metadata};
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the engine configuration
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Boxels CLI", metadata::NAME.green().bold());
        println!();
        println!("Run {} for available commands.", "box --help".cyan());
        return Ok(());
    };

    let project = project_dir(cli.cwd.as_deref())?;
    tracing::debug!(project = %project.display(), "Project directory");

    let cache = ConfigCache::new(ConfigResolver::new(project));
    execute_command(&cache, command).await
}

fn project_dir(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(CliError::user(format!(
            "Project directory does not exist: {}",
            dir.display()
        ))),
        None => Ok(std::env::current_dir()?),
    }
}

async fn execute_command(cache: &ConfigCache, command: Commands) -> Result<()> {
    match command {
        Commands::Build(args) => commands::run_build(cache, &args).await,
        Commands::Serve(args) => commands::run_serve(cache, &args).await,
        Commands::Preview(args) => commands::run_preview(cache, &args).await,
        Commands::Config { json } => commands::run_config(cache, json).await,
    }
}
