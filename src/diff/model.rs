//! Diff result types

use crate::snapshot::{SizeDelta, SizeEntry};
use serde::Serialize;

/// Size change of one named item (a file or a page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeChange {
    /// File path or page identifier
    pub name: String,
    /// Size in the previous run, `{0,0}` when absent
    pub previous: SizeEntry,
    /// Size in the current run, `{0,0}` when absent
    pub current: SizeEntry,
    /// `current - previous`
    pub delta: SizeDelta,
}

impl SizeChange {
    /// Build a change record, computing the delta
    pub fn new(name: &str, previous: SizeEntry, current: SizeEntry) -> Self {
        Self {
            name: name.to_string(),
            previous,
            current,
            delta: current - previous,
        }
    }
}

/// A route that appeared or disappeared between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteChange {
    /// Route path
    pub route: String,
    /// Resolved source file from the snapshot the route exists in
    pub source_file: Option<String>,
}

/// Change of the global bundle total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GlobalChange {
    /// Previous global total, `{0,0}` on a first run
    pub previous: SizeEntry,
    /// Current global total
    pub current: SizeEntry,
    /// `current - previous`
    pub delta: SizeDelta,
}

/// Classified differences between two snapshots
///
/// Lists come out of the engine in ascending key order; presentation order
/// is decided by the report module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Global bundle change
    pub global: GlobalChange,
    /// Files present in both runs with a non-zero delta
    pub changed_files: Vec<SizeChange>,
    /// Files only present in the current run
    pub new_files: Vec<SizeChange>,
    /// Files only present in the previous run
    pub removed_files: Vec<SizeChange>,
    /// Pages whose total changed (absent side counts as zero)
    pub changed_pages: Vec<SizeChange>,
    /// Routes only present in the current run
    pub new_routes: Vec<RouteChange>,
    /// Routes only present in the previous run
    pub removed_routes: Vec<RouteChange>,
}

impl DiffResult {
    /// Total number of reported changes, excluding the global delta
    pub fn total_changes(&self) -> usize {
        self.changed_files.len()
            + self.new_files.len()
            + self.removed_files.len()
            + self.changed_pages.len()
            + self.new_routes.len()
            + self.removed_routes.len()
    }

    /// True when nothing changed, global total included
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0 && self.global.delta.is_zero()
    }

    /// One-line summary of the change counts
    pub fn summary(&self) -> String {
        format!(
            "files: ~{} +{} -{}, pages: ~{}, routes: +{} -{}",
            self.changed_files.len(),
            self.new_files.len(),
            self.removed_files.len(),
            self.changed_pages.len(),
            self.new_routes.len(),
            self.removed_routes.len()
        )
    }
}
