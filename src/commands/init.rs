//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which prepares an ArchiveBox
//! data directory for use. It creates the directory (and any missing
//! parents) if absent, then runs the external `init --force` command so that
//! initialization succeeds even when the directory is non-empty.
//!
//! The operation is idempotent: running it against an already-initialized
//! directory is safe.

use anyhow::Result;
use std::fs;

use archivebox_runner::config::Settings;
use archivebox_runner::runner;

/// Execute the `init` command.
pub fn execute(settings: &Settings) -> Result<()> {
    fs::create_dir_all(&settings.data_dir)?;

    runner::run(settings, &["init", "--force"], None)?;

    println!("Initialized ArchiveBox in {}.", settings.data_dir.display());
    Ok(())
}
