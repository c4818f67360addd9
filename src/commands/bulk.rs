//! # Bulk Command Implementation
//!
//! This module implements the `bulk` subcommand, which adds every URL listed
//! in `<data-dir>/urls.txt` (newline-delimited, externally authored) in a
//! single external invocation. The file's raw bytes are streamed to the
//! tool's standard input, so ArchiveBox receives the list byte-identical to
//! the file contents.
//!
//! A missing urls file is not an error: the command reports the expected
//! path and returns normally without invoking the external tool.

use anyhow::Result;
use clap::Args;

use archivebox_runner::config::Settings;
use archivebox_runner::runner;

use super::IndexingFlags;

/// Add all URLs from urls.txt to ArchiveBox via stdin
#[derive(Args, Debug, Default)]
pub struct BulkArgs {
    #[command(flatten)]
    pub indexing: IndexingFlags,
}

/// Execute the `bulk` command.
pub fn execute(settings: &Settings, args: BulkArgs) -> Result<()> {
    let urls_file = &settings.urls_file;

    if !urls_file.is_file() {
        println!("URLs file not found: {}", urls_file.display());
        return Ok(());
    }

    let mut argv = vec!["add"];
    if args.indexing.enabled() {
        argv.push("--index-only");
    }

    runner::run(settings, &argv, Some(urls_file))?;

    println!("Archived all URLs from {}.", urls_file.display());
    Ok(())
}
