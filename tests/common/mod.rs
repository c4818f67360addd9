//! Shared test utilities for E2E tests.
//!
//! This module provides a common fixture to reduce duplication across test
//! files. The external ArchiveBox tool is observed through a stub executable
//! that records its argument list, working directory, and standard input
//! under the fixture root.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     let stub = fixture.stub_binary();
//!     // ... test code
//! }
//! ```

use std::fs;
use std::path::PathBuf;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temp workspace with a recording stub standing in for ArchiveBox.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    /// Path of the data directory used in tests. Not created by default.
    pub fn data_dir(&self) -> PathBuf {
        self.temp.path().join("archivebox")
    }

    /// Create the data directory and return its path.
    pub fn create_data_dir(&self) -> PathBuf {
        let dir = self.data_dir();
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a stub executable that records its argv, cwd, and stdin under
    /// the fixture root, then exits successfully.
    pub fn stub_binary(&self) -> PathBuf {
        self.stub_binary_with_exit(0)
    }

    /// Same as [`stub_binary`](Self::stub_binary) but exits with `exit_code`.
    pub fn stub_binary_with_exit(&self, exit_code: i32) -> PathBuf {
        let root = self.temp.path();
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" > \"{root}/invoked-args.txt\"\n\
             pwd > \"{root}/invoked-cwd.txt\"\n\
             cat > \"{root}/invoked-stdin.txt\"\n\
             exit {exit_code}\n",
            root = root.display(),
            exit_code = exit_code,
        );

        let path = root.join("archivebox-stub");
        fs::write(&path, script).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        path
    }

    /// Whether the stub was executed at all.
    pub fn was_invoked(&self) -> bool {
        self.temp.path().join("invoked-args.txt").exists()
    }

    /// The space-joined argument list the stub received (program excluded).
    pub fn recorded_args(&self) -> String {
        self.read_recording("invoked-args.txt")
    }

    /// The working directory the stub ran in.
    pub fn recorded_cwd(&self) -> PathBuf {
        PathBuf::from(self.read_recording("invoked-cwd.txt"))
    }

    /// The raw bytes the stub received on standard input.
    pub fn recorded_stdin(&self) -> Vec<u8> {
        fs::read(self.temp.path().join("invoked-stdin.txt")).unwrap()
    }

    fn read_recording(&self, name: &str) -> String {
        fs::read_to_string(self.temp.path().join(name))
            .unwrap()
            .trim_end()
            .to_string()
    }
}
