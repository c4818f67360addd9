//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `archivebox-runner` application. It uses the `thiserror` library to create
//! an `Error` enum covering the failure modes of driving an external process:
//!
//! - Launch failures (the process could not be spawned for a reason other
//!   than a missing executable).
//! - Missing executables (neither the primary binary nor the fallback form
//!   could be found).
//! - Non-zero exits from the external tool.
//! - I/O errors from filesystem operations (directory creation, opening the
//!   URLs file).
//!
//! Each variant carries the rendered command line so the user can see exactly
//! what was attempted. The `Result` type alias is used throughout the library
//! to simplify signatures.

use thiserror::Error;

/// Main error type for archivebox-runner operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external process could not be launched for a reason other than a
    /// missing executable (e.g. permission denied).
    #[error("Failed to launch command: {command} - {message}")]
    Launch { command: String, message: String },

    /// Neither the primary executable nor the fallback form could be found.
    #[error("Command not found: {command}")]
    NotFound { command: String },

    /// The external process ran but exited with a non-zero status.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("Command failed: {command} (exit code {})", code.map(|c| c.to_string()).unwrap_or_else(|| String::from("unknown")))]
    CommandFailed { command: String, code: Option<i32> },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
