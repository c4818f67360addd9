//! # External Process Invocation
//!
//! This module is the single place where the external ArchiveBox tool is
//! executed. Every command handler builds an operation argument list and
//! hands it to [`run`], which:
//!
//! 1. Launches the primary form: the configured `--binary` path if provided,
//!    otherwise the bare `archivebox` name resolved via `PATH`.
//! 2. If (and only if) the primary executable cannot be found, announces and
//!    launches the fallback form exactly once: `python3 -m archivebox`, the
//!    tool's module invocation.
//!
//! Both forms run with the data directory as the working directory and
//! inherit stdout/stderr, so the tool's own output passes through
//! unmodified. An optional stdin source is given as a file path and opened
//! fresh per launch attempt, so the fallback can re-read it from the start.
//!
//! A non-zero exit from whichever form ran is fatal and does not trigger the
//! fallback; only executable-not-found does. The launch outcome is inspected
//! explicitly via [`Attempt`] rather than bubbling raw spawn errors, so the
//! two cases stay distinguishable at the call site.

use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Bare executable name of the external tool, resolved via `PATH`.
pub const ARCHIVEBOX_PROGRAM: &str = "archivebox";

/// Interpreter used for the module-invocation fallback form.
pub const FALLBACK_INTERPRETER: &str = "python3";

/// Outcome of a single launch attempt.
enum Attempt {
    /// The process spawned and exited with the given status.
    Ran(ExitStatus),
    /// The executable could not be found.
    NotFound,
}

/// Build the primary argument vector (program first).
pub fn primary_argv(settings: &Settings, args: &[&str]) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    match &settings.binary {
        Some(path) => argv.push(path.clone().into_os_string()),
        None => argv.push(OsString::from(ARCHIVEBOX_PROGRAM)),
    }
    argv.extend(args.iter().map(OsString::from));
    argv
}

/// Build the fallback argument vector: `python3 -m archivebox <args...>`.
pub fn fallback_argv(args: &[&str]) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(args.len() + 3);
    argv.push(OsString::from(FALLBACK_INTERPRETER));
    argv.push(OsString::from("-m"));
    argv.push(OsString::from(ARCHIVEBOX_PROGRAM));
    argv.extend(args.iter().map(OsString::from));
    argv
}

/// Render an argument vector for diagnostics and error messages.
pub fn render(argv: &[OsString]) -> String {
    argv.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the external tool with the given operation arguments.
///
/// `stdin` is a path whose raw bytes are streamed to the child's standard
/// input; `None` leaves stdin inherited. The working directory is always the
/// configured data directory.
pub fn run(settings: &Settings, args: &[&str], stdin: Option<&Path>) -> Result<()> {
    let primary = primary_argv(settings, args);

    match launch(&primary, &settings.data_dir, stdin)? {
        Attempt::Ran(status) => finish(&primary, status),
        Attempt::NotFound => {
            let fallback = fallback_argv(args);
            println!("Falling back to: {}", render(&fallback));

            match launch(&fallback, &settings.data_dir, stdin)? {
                Attempt::Ran(status) => finish(&fallback, status),
                Attempt::NotFound => Err(Error::NotFound {
                    command: render(&fallback),
                }),
            }
        }
    }
}

fn launch(argv: &[OsString], cwd: &Path, stdin: Option<&Path>) -> Result<Attempt> {
    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]).current_dir(cwd);

    if let Some(path) = stdin {
        cmd.stdin(Stdio::from(File::open(path)?));
    }

    debug!("running: {} (cwd: {})", render(argv), cwd.display());

    match cmd.status() {
        Ok(status) => Ok(Attempt::Ran(status)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Attempt::NotFound),
        Err(e) => Err(Error::Launch {
            command: render(argv),
            message: e.to_string(),
        }),
    }
}

fn finish(argv: &[OsString], status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: render(argv),
            code: status.code(),
        })
    }
}
