//! JSON output for CI integration

use crate::diff::DiffResult;
use crate::snapshot::SizeEntry;
use serde::Serialize;

/// Machine-readable report printed with `--json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    /// Whether a previous snapshot was available
    pub has_baseline: bool,
    /// Current global total
    pub global: SizeEntry,
    /// One-line change summary
    pub summary: String,
    /// Full classified diff
    pub diff: &'a DiffResult,
}

impl<'a> JsonReport<'a> {
    /// Create a report for a diff
    pub fn new(diff: &'a DiffResult, has_baseline: bool) -> Self {
        Self {
            has_baseline,
            global: diff.global.current,
            summary: diff.summary(),
            diff,
        }
    }

    /// Convert to a pretty JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error formatting JSON: {}", e),
        }
    }
}
