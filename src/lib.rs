//! # ArchiveBox Runner Library
//!
//! This library provides the core functionality for the `archivebox-runner`
//! command-line tool: resolving the runtime configuration and invoking the
//! external ArchiveBox executable. It contains no archiving logic of its own;
//! all durable state (the archive index and content) is owned by ArchiveBox,
//! which is driven as a black-box subprocess.
//!
//! ## Quick Example
//!
//! ```
//! use archivebox_runner::config::Settings;
//! use archivebox_runner::runner;
//!
//! let settings = Settings::new(Some("/tmp/archive".into()), None).unwrap();
//! assert_eq!(settings.urls_file, settings.data_dir.join("urls.txt"));
//!
//! // Argument lists are built without touching the external tool.
//! let argv = runner::primary_argv(&settings, &["add", "--index-only", "https://example.com"]);
//! assert_eq!(argv[0], "archivebox");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: an immutable [`config::Settings`] struct
//!   resolved once at startup from CLI flags and defaults, then passed by
//!   reference to every command handler.
//! - **Process invocation (`runner`)**: builds an argument list, runs the
//!   configured binary (or the bare `archivebox` name from `PATH`) with the
//!   data directory as working directory, and falls back to `python3 -m
//!   archivebox` exactly once when the primary executable cannot be found.
//! - **Errors (`error`)**: a single [`error::Error`] enum distinguishing
//!   launch failures, missing executables, and non-zero exits.
//!
//! Each CLI invocation handles exactly one command, issues at most one
//! external process invocation (plus at most one fallback attempt), and
//! blocks until the child exits. No locking is performed on the data
//! directory; overlapping scheduled runs are coordinated externally.

pub mod config;
pub mod defaults;
pub mod error;
pub mod runner;
