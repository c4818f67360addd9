//! Default values for archivebox-runner configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::env;
use std::path::PathBuf;

/// Returns the default ArchiveBox data directory: `<cwd>/srv/archivebox`.
///
/// Falls back to `./srv/archivebox` relative to the process if the current
/// working directory cannot be determined.
///
/// This can be overridden by the `--data-dir` CLI flag.
pub fn default_data_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("srv")
        .join("archivebox")
}
