//! Snapshot data model: the measured state of one analysis run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Sub};

/// Raw and gzip byte size of one file or bundle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Uncompressed byte length
    pub raw: u64,
    /// Byte length after gzip compression of the same content
    pub gzip: u64,
}

impl SizeEntry {
    /// The size of an absent file
    pub const ZERO: SizeEntry = SizeEntry { raw: 0, gzip: 0 };

    /// Create a new size entry
    pub const fn new(raw: u64, gzip: u64) -> Self {
        Self { raw, gzip }
    }
}

impl Add for SizeEntry {
    type Output = SizeEntry;

    fn add(self, rhs: SizeEntry) -> SizeEntry {
        SizeEntry {
            raw: self.raw + rhs.raw,
            gzip: self.gzip + rhs.gzip,
        }
    }
}

impl AddAssign for SizeEntry {
    fn add_assign(&mut self, rhs: SizeEntry) {
        *self = *self + rhs;
    }
}

impl Sub for SizeEntry {
    type Output = SizeDelta;

    fn sub(self, rhs: SizeEntry) -> SizeDelta {
        SizeDelta {
            raw: self.raw as i64 - rhs.raw as i64,
            gzip: self.gzip as i64 - rhs.gzip as i64,
        }
    }
}

/// Signed difference between two [`SizeEntry`] values (current - previous)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeDelta {
    /// Raw byte difference
    pub raw: i64,
    /// Gzip byte difference
    pub gzip: i64,
}

impl SizeDelta {
    /// True when neither component changed
    pub fn is_zero(&self) -> bool {
        self.raw == 0 && self.gzip == 0
    }
}

/// Route source mapping for one discovered route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Route source identifier as it appears in the route manifest
    pub source: String,
    /// Resolved source file, `None` when no candidate exists
    pub source_file: Option<String>,
}

/// Measured state of one analysis run
///
/// Built once by [`super::SnapshotBuilder`] and never mutated afterwards.
/// Serializes to the extended snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Total size of the global/shared bundle
    pub global: SizeEntry,
    /// Per-page totals, excluding global files
    #[serde(default)]
    pub pages: BTreeMap<String, SizeEntry>,
    /// Every distinct file measured in the run
    #[serde(default)]
    pub files: BTreeMap<String, SizeEntry>,
    /// Route path to its source mapping
    #[serde(default)]
    pub routes: BTreeMap<String, RouteInfo>,
    /// Global files in manifest order, deduplicated
    #[serde(default)]
    pub root_main_files: Vec<String>,
}

impl Snapshot {
    /// Size of a file in this snapshot, `{0,0}` when unknown
    pub fn file_size(&self, file: &str) -> SizeEntry {
        self.files.get(file).copied().unwrap_or_default()
    }

    /// Resolved source file of a route, if the route exists and resolved
    pub fn route_source(&self, route: &str) -> Option<&str> {
        self.routes
            .get(route)
            .and_then(|info| info.source_file.as_deref())
    }

    /// Flattened compat document: `{"global": .., "<page>": .., ...}`
    ///
    /// A page literally named `global` would collide with the global entry;
    /// the global entry wins.
    pub fn to_compat(&self) -> BTreeMap<String, SizeEntry> {
        let mut compat = self.pages.clone();
        compat.insert(COMPAT_GLOBAL_KEY.to_string(), self.global);
        compat
    }

    /// Rebuild a partial snapshot from the compat document
    ///
    /// Only `global` and `pages` survive the flattened format.
    pub fn from_compat(mut compat: BTreeMap<String, SizeEntry>) -> Self {
        let global = compat.remove(COMPAT_GLOBAL_KEY).unwrap_or_default();
        Self {
            global,
            pages: compat,
            ..Self::default()
        }
    }
}

/// Key of the global entry in the compat document
pub const COMPAT_GLOBAL_KEY: &str = "global";
