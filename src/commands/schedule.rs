//! # Schedule Command Implementation
//!
//! This module implements the `schedule` subcommand, a convenience wrapper
//! meant to be invoked by an external time-based scheduler (cron). It logs a
//! timestamped start banner, runs the bulk operation with its defaults
//! (index-only), and logs a completion message.
//!
//! No internal scheduling, retry, or locking is performed. The data
//! directory is not locked, so two overlapping scheduled runs are not
//! guarded against; single-run coordination is the scheduler's job.

use anyhow::Result;
use chrono::Local;

use archivebox_runner::config::Settings;

use super::bulk::{self, BulkArgs};

/// Execute the `schedule` command.
pub fn execute(settings: &Settings) -> Result<()> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{}] Starting scheduled archive run...", now);

    bulk::execute(settings, BulkArgs::default())?;

    println!("Scheduled archive run complete.");
    Ok(())
}
