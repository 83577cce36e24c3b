//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Sample keymap shipped with the repository
pub const SAMPLE_KEYMAP: &str = include_str!("../../samples/reaper-kb.ini");

/// Write bytes to a file inside a fresh temp dir
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn write_temp_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}

/// Write the sample keymap to a temp file
pub fn sample_keymap_file() -> (TempDir, PathBuf) {
    write_temp_file("reaper-kb.ini", SAMPLE_KEYMAP.as_bytes())
}
