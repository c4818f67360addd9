//! # List Command Implementation
//!
//! This module implements the `list` subcommand, a thin pass-through to the
//! external `manage list` operation. The tool's output is inherited and
//! reaches the terminal unmodified.

use anyhow::Result;

use archivebox_runner::config::Settings;
use archivebox_runner::runner;

/// Execute the `list` command.
pub fn execute(settings: &Settings) -> Result<()> {
    runner::run(settings, &["manage", "list"], None)?;
    Ok(())
}
