//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture's contents.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("Failed to read fixture")
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while
/// the path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    write_dataset(&load_fixture(name))
}

/// Write raw JSON to `data.json` in a fresh temp dir.
pub fn write_dataset(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data.json");
    fs::write(&path, json).expect("Failed to write dataset");
    (temp_dir, path)
}
