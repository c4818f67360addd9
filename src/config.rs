//! # Runtime Configuration
//!
//! This module defines [`Settings`], the resolved runtime configuration for a
//! single CLI invocation. It is constructed exactly once from the global CLI
//! flags and defaults, is immutable thereafter, and is passed by reference to
//! every command handler.
//!
//! Both the data directory and the binary path (when given) are absolutized
//! against the current working directory, since every external invocation
//! runs with the data directory as its working directory and a relative
//! binary path would otherwise resolve against the wrong location.

use std::env;
use std::path::PathBuf;

use crate::defaults;
use crate::error::Result;

/// Name of the bulk-add input file inside the data directory.
pub const URLS_FILE_NAME: &str = "urls.txt";

/// Resolved configuration shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute path to the ArchiveBox data directory.
    pub data_dir: PathBuf,

    /// Absolute path to the ArchiveBox binary, when configured. `None` means
    /// the bare `archivebox` name is resolved via `PATH`.
    pub binary: Option<PathBuf>,

    /// Absolute path to the bulk-add input file, always
    /// `data_dir/urls.txt`.
    pub urls_file: PathBuf,
}

impl Settings {
    /// Resolve settings from the global CLI flags.
    ///
    /// A missing `data_dir` falls back to
    /// [`defaults::default_data_dir`] (`<cwd>/srv/archivebox`).
    pub fn new(data_dir: Option<PathBuf>, binary: Option<PathBuf>) -> Result<Self> {
        let data_dir = absolutize(data_dir.unwrap_or_else(defaults::default_data_dir))?;
        let binary = binary.map(absolutize).transpose()?;
        let urls_file = data_dir.join(URLS_FILE_NAME);

        Ok(Self {
            data_dir,
            binary,
            urls_file,
        })
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
