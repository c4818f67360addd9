//! End-to-end tests for the `init` command.
//!
//! `init` must create the data directory (including missing parents), run
//! the external `init --force` with the data directory as working directory,
//! and be idempotent.

#![cfg(unix)]

mod common;
use common::prelude::*;

#[test]
fn test_init_creates_data_directory() {
    let fixture = TestFixture::new();
    let stub = fixture.stub_binary();
    let data_dir = fixture.data_dir();

    assert!(!data_dir.exists());

    cargo_bin_cmd!("archivebox-runner")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--binary")
        .arg(&stub)
        .arg("init")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Initialized ArchiveBox in"));

    assert!(data_dir.is_dir());
    assert_eq!(fixture.recorded_args(), "init --force");
}

#[test]
fn test_init_creates_missing_parents() {
    let fixture = TestFixture::new();
    let stub = fixture.stub_binary();
    let data_dir = fixture.temp.path().join("srv/nested/archivebox");

    cargo_bin_cmd!("archivebox-runner")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--binary")
        .arg(&stub)
        .arg("init")
        .assert()
        .code(0);

    assert!(data_dir.is_dir());
}

#[test]
fn test_init_runs_in_data_directory() {
    let fixture = TestFixture::new();
    let stub = fixture.stub_binary();
    let data_dir = fixture.data_dir();

    cargo_bin_cmd!("archivebox-runner")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--binary")
        .arg(&stub)
        .arg("init")
        .assert()
        .code(0);

    // Canonicalize both sides; the temp dir may sit behind a symlink.
    assert_eq!(
        fixture.recorded_cwd().canonicalize().unwrap(),
        data_dir.canonicalize().unwrap()
    );
}

#[test]
fn test_init_is_idempotent() {
    let fixture = TestFixture::new();
    let stub = fixture.stub_binary();
    let data_dir = fixture.create_data_dir();

    for _ in 0..2 {
        cargo_bin_cmd!("archivebox-runner")
            .arg("--data-dir")
            .arg(&data_dir)
            .arg("--binary")
            .arg(&stub)
            .arg("init")
            .assert()
            .code(0);
    }

    assert!(data_dir.is_dir());
}
