#![allow(deprecated)]

// Integration tests for the adscore CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the adscore binary.
fn adscore() -> Command {
    Command::cargo_bin("adscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    adscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("adscore"));
}

#[test]
fn cli_help_flag() {
    adscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("real-estate listings"));
}

#[test]
fn score_requires_data_path() {
    adscore()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn normalize_requires_text() {
    adscore()
        .arg("normalize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_conflict() {
    adscore()
        .args(["-v", "-q", "normalize", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn normalize_prints_one_line_per_text() {
    adscore()
        .args(["normalize", "Ático CÉNTRICO", "Niño"])
        .assert()
        .success()
        .stdout("atico centrico\nnino\n");
}

#[test]
fn missing_data_file_is_a_runtime_failure() {
    adscore()
        .args(["score", "/nonexistent/adscore/listings.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data file not found"));
}
