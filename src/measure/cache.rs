//! Per-run size cache keyed by resolved absolute path

use crate::snapshot::SizeEntry;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Cache counters, mostly useful to prove that no file is read twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Entries inserted after an actual read and compression
    pub measured: usize,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<PathBuf, SizeEntry>,
    stats: CacheStats,
}

/// Memoized file sizes for a single analysis run
///
/// Create one per run and drop it at the end; nothing survives across runs.
/// Interior mutability lets the measurer share it by reference, including
/// from parallel prefetch workers.
#[derive(Default)]
pub struct SizeCache {
    state: Mutex<CacheState>,
}

impl SizeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resolved path, counting a hit when present
    pub fn get(&self, key: &Path) -> Option<SizeEntry> {
        let mut state = self.state.lock();
        let entry = state.entries.get(key).copied();
        if entry.is_some() {
            state.stats.hits += 1;
        }
        entry
    }

    /// Whether a resolved path has been measured, without touching counters
    pub fn contains(&self, key: &Path) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    /// Record a fresh measurement
    ///
    /// Returns the entry already stored for `key` if another caller won the
    /// race; the first measurement is kept.
    pub fn insert(&self, key: PathBuf, entry: SizeEntry) -> SizeEntry {
        let mut state = self.state.lock();
        if let Some(existing) = state.entries.get(&key) {
            return *existing;
        }
        state.entries.insert(key, entry);
        state.stats.measured += 1;
        entry
    }

    /// Number of distinct paths measured so far
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// True when nothing has been measured yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the hit/measure counters
    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats
    }
}
