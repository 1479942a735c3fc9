//! Integration tests for the lmpmap command line

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use super::helpers::{fixtures_dir, temp_fixture};

/// Helper to run lmpmap and capture output
fn run_lmpmap(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_lmpmap"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute lmpmap");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().into_owned()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_lmpmap(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("play"));
    assert!(stdout.contains("inspect"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn play_help_shows_options() {
    Command::cargo_bin("lmpmap")
        .unwrap()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--interval-ms"))
        .stdout(predicate::str::contains("--center"))
        .stdout(predicate::str::contains("--autoplay"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_lmpmap(&["bogus"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("bogus"));
}

#[test]
fn bad_center_is_a_usage_error() {
    let (_stdout, _stderr, exit_code) = run_lmpmap(&["play", "--center", "north"]);
    assert_eq!(exit_code, 2);
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn inspect_prints_one_line_per_step() {
    let (stdout, stderr, exit_code) = run_lmpmap(&["inspect", &fixture_arg("two_steps.json")]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("2 steps, 2 records"));
    assert!(stdout.contains("   0  t0  1/1 drawn  >=0.9 1  >=0.5 0  <0.5 0  n/a 0"));
    assert!(stdout.contains("   1  t1  1/1 drawn  >=0.9 0  >=0.5 0  <0.5 0  n/a 1"));
}

#[test]
fn inspect_counts_skipped_records() {
    let (_dir, path) = temp_fixture("missing_coords.json");
    let (stdout, _stderr, exit_code) = run_lmpmap(&["inspect", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("2/4 drawn"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn empty_dataset_reports_no_data() {
    let (_stdout, stderr, exit_code) = run_lmpmap(&["inspect", &fixture_arg("empty.json")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No data found"));
    assert!(stderr.contains("empty.json"));
}

#[test]
fn play_with_empty_dataset_fails_before_opening_the_player() {
    Command::cargo_bin("lmpmap")
        .unwrap()
        .args(["play", &fixture_arg("empty.json")])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No data found"));
}

#[test]
fn non_array_dataset_reports_no_data() {
    let (_stdout, stderr, exit_code) = run_lmpmap(&["inspect", &fixture_arg("object.json")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No data found"));
    assert!(stderr.contains("array"));
}

#[test]
fn missing_file_reports_no_data() {
    let (_stdout, stderr, exit_code) = run_lmpmap(&["inspect", "/nonexistent/lmp.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No data found (/nonexistent/lmp.json)"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn bash_completions_mention_binary() {
    let (stdout, _stderr, exit_code) = run_lmpmap(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("lmpmap"));
}
