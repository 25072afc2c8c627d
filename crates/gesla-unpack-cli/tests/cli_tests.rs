//! Integration tests for gesla-unpack-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use gesla_unpack_core::test_utils::create_test_zip;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn gesla_cmd() -> Command {
    cargo_bin_cmd!("gesla-unpack")
}

/// Writes a two-entry archive at `path`, creating parent directories.
fn write_sample_archive(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create archive dir");
    }
    let data = create_test_zip(&[("a.txt", "hello"), ("sub/b.txt", "world")]);
    fs::write(path, data).expect("failed to write archive");
}

fn sample_archive(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("in.zip");
    write_sample_archive(&path);
    path
}

#[test]
fn test_version_flag() {
    gesla_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gesla-unpack"));
}

#[test]
fn test_help_flag() {
    gesla_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GESLA-4"))
        .stdout(predicate::str::contains("--output-dir"));
}

/// A bare invocation extracts the fixed archive into the fixed directory.
#[test]
fn test_no_arguments_uses_fixed_paths() {
    let temp = TempDir::new().expect("failed to create temp dir");
    write_sample_archive(&temp.path().join("data/GESLA4_ALL.zip"));

    gesla_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted into"));

    let out = temp.path().join("data/GESLA4_ALL");
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(out.join("sub/b.txt")).unwrap(), "world");
}

/// Missing archive fails but the destination has already been created.
#[test]
fn test_missing_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");

    gesla_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Archive not found"))
        .stderr(predicate::str::contains("GESLA4_ALL.zip"));

    let out = temp.path().join("data/GESLA4_ALL");
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_explicit_paths() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);
    let out = temp.path().join("custom/out");

    gesla_cmd()
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files extracted: 2"));

    assert!(out.join("sub/b.txt").exists());
}

#[test]
fn test_existing_files_are_kept() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("c.txt"), "keep").unwrap();

    gesla_cmd()
        .arg("-a")
        .arg(&archive)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out.join("c.txt")).unwrap(), "keep");
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "hello");
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);

    let output = gesla_cmd()
        .arg("--json")
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["data"]["files_extracted"], 2);
    assert_eq!(json["data"]["bytes_written"], 10);
}

#[test]
fn test_quiet_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);

    gesla_cmd()
        .arg("--quiet")
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);

    gesla_cmd()
        .arg("--verbose")
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration"));
}

#[test]
fn test_corrupt_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("bad.zip");
    fs::write(&archive, "not a zip file").unwrap();

    gesla_cmd()
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid archive"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_output_dir_is_file_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_archive(&temp);
    let out = temp.path().join("out");
    fs::write(&out, "file").unwrap();

    gesla_cmd()
        .arg("--archive")
        .arg(&archive)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_positional_argument_rejected() {
    gesla_cmd().arg("archive.zip").assert().failure();
}
