//! # Add Command Implementation
//!
//! This module implements the `add` subcommand, which records a single URL in
//! the ArchiveBox instance. By default the URL is added index-only (no
//! content extractors run); `--no-index-only` switches to the full pipeline.

use anyhow::Result;
use clap::Args;

use archivebox_runner::config::Settings;
use archivebox_runner::runner;

use super::IndexingFlags;

/// Add a single URL to ArchiveBox for archiving
#[derive(Args, Debug)]
pub struct AddArgs {
    /// URL to add to the archive
    pub url: String,

    #[command(flatten)]
    pub indexing: IndexingFlags,
}

/// Execute the `add` command.
pub fn execute(settings: &Settings, args: AddArgs) -> Result<()> {
    let mut argv = vec!["add"];
    if args.indexing.enabled() {
        argv.push("--index-only");
    }
    argv.push(&args.url);

    runner::run(settings, &argv, None)?;

    println!("Added URL: {}", args.url);
    Ok(())
}
