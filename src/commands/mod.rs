//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `archivebox-runner` command-line tool. Each subcommand is defined in its
//! own file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap` (commands without options take only the
//!   shared settings).
//! - An `execute` function that takes the resolved [`Settings`] (and parsed
//!   `Args` where present) and performs the command's logic, delegating the
//!   actual external invocation to `archivebox_runner::runner`.
//!
//! [`Settings`]: archivebox_runner::config::Settings

use clap::Args;

pub mod add;
pub mod bulk;
pub mod init;
pub mod list;
pub mod schedule;

/// Shared `--index-only` / `--no-index-only` flag pair.
///
/// Index-only is the default: URLs are recorded in the ArchiveBox index
/// without running the content extractors. The flags are mutually
/// overriding, so the last one on the command line wins.
#[derive(Args, Debug, Default)]
pub struct IndexingFlags {
    /// Only add to the index without running extractors (default)
    #[arg(long, overrides_with = "no_index_only")]
    index_only: bool,

    /// Run the full extractor pipeline when adding
    #[arg(long, overrides_with = "index_only")]
    no_index_only: bool,
}

impl IndexingFlags {
    /// Whether the external `--index-only` flag should be passed.
    pub fn enabled(&self) -> bool {
        !self.no_index_only
    }
}
