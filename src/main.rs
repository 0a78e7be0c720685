//! DroidScout command-line entry point
//!
//! Loads the configuration, installs logging and dispatches to a command.

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use droidscout::commands::{EnvCommand, GetCommand, InitConfigCommand, LocateCommand};
use droidscout::core::{ScoutConfig, APP_NAME, VERSION};

#[derive(Parser)]
#[command(name = "droidscout", version, about = "Locate the Android SDK and JDK toolchain")]
struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every resolved tool path
    Locate {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print one resolved path, e.g. `adb_path`
    Get { key: String },
    /// Print shell exports for the resolved toolchain
    Env,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} v{} starting...", APP_NAME, VERSION);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Command::InitConfig { force }) = cli.command {
        let path = InitConfigCommand { path: cli.config, force }.execute().await?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match cli.config {
        Some(ref path) => ScoutConfig::load_from(path).await?,
        None => ScoutConfig::load().await?,
    };

    match cli.command.unwrap_or(Command::Locate { json: false }) {
        Command::Locate { json } => LocateCommand { json }.execute(config),
        Command::Get { key } => GetCommand { key }.execute(config),
        Command::Env => EnvCommand.execute(config),
        Command::InitConfig { .. } => Ok(()),
    }
}
