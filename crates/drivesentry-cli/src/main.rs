//! DriveSentry CLI - Command-line interface for DriveSentry
//!
//! Provides commands for:
//! - Running one reconciliation pass over the watched folders
//! - Previewing pending notifications without sending them
//! - Viewing and validating configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{config::ConfigCommand, preview::PreviewCommand, run::RunCommand};
use drivesentry_core::config::Config;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "drivesentry",
    version,
    about = "Watches Google Drive folders and announces new items on Discord"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Poll the watched folders and notify new items
    Run(RunCommand),
    /// Show pending notifications without sending anything
    Preview(PreviewCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_path);

    // Setup tracing: -v flags override the configured level,
    // RUST_LOG overrides everything.
    let filter = match cli.verbose {
        0 => Config::load_or_default(&config_path).logging.level,
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.command {
        Commands::Run(cmd) => cmd.execute(&config_path, format).await,
        Commands::Preview(cmd) => cmd.execute(&config_path, format).await,
        Commands::Config(cmd) => cmd.execute(&config_path, format).await,
    }
}
