//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use archivebox_runner::config::Settings;

use crate::commands;

/// ArchiveBox Runner - Automate an ArchiveBox instance from the command line
#[derive(Parser, Debug)]
#[command(name = "archivebox-runner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the ArchiveBox data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Path to the ArchiveBox CLI binary (default: auto-detect via PATH)
    #[arg(long, global = true, value_name = "PATH")]
    binary: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the ArchiveBox data directory (force, even if non-empty)
    Init,

    /// Add a single URL to ArchiveBox for archiving
    Add(commands::add::AddArgs),

    /// Add all URLs from urls.txt to ArchiveBox via stdin
    Bulk(commands::bulk::BulkArgs),

    /// List all archived snapshots with dates
    List,

    /// Run a scheduled snapshot for all URLs (to be triggered via cron)
    Schedule,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let settings = Settings::new(self.data_dir, self.binary)?;

        match self.command {
            Commands::Init => commands::init::execute(&settings),
            Commands::Add(args) => commands::add::execute(&settings, args),
            Commands::Bulk(args) => commands::bulk::execute(&settings, args),
            Commands::List => commands::list::execute(&settings),
            Commands::Schedule => commands::schedule::execute(&settings),
        }
    }
}

fn init_logging(level: &str) {
    let level = log::LevelFilter::from_str(level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();
}
