//! Test assertion helpers
//!
//! Utilities for inspecting the snapshot files written to the history
//! directory and the JSON printed by `--json`.

use std::fs;
use std::path::Path;

/// Parse a JSON file, panicking with the path on failure
#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("{} is not JSON: {}", path.display(), e))
}

/// Assert that a size object has the expected raw byte count and a
/// positive gzip size
#[allow(dead_code)]
pub fn assert_raw_size(value: &serde_json::Value, expected_raw: u64) {
    assert_eq!(
        value["raw"].as_u64(),
        Some(expected_raw),
        "unexpected raw size in {}",
        value
    );
    assert!(
        value["gzip"].as_u64().is_some_and(|g| g > 0),
        "gzip size missing or zero in {}",
        value
    );
}

/// Position of the first line containing `needle`
#[allow(dead_code)]
pub fn line_index(output: &str, needle: &str) -> usize {
    output
        .lines()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {:?} in:\n{}", needle, output))
}
