//! Snapshot persistence (I/O)
//!
//! Two documents are written per run into the history directory:
//!
//! - `sizes.json`: the flattened compat shape `{"global": .., "<page>": ..}`
//!   read by existing diff tooling
//! - `sizes.extended.json`: the full snapshot, including per-file sizes and
//!   routes
//!
//! Loading the previous run never fails: a missing or malformed document is
//! reported as absent.

use super::model::{SizeEntry, Snapshot};
use crate::error::BundleDeltaError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default history directory, relative to the project root
pub const DEFAULT_HISTORY_DIR: &str = ".bundle-delta";
/// Compat snapshot file name
pub const COMPAT_FILE: &str = "sizes.json";
/// Extended snapshot file name
pub const EXTENDED_FILE: &str = "sizes.extended.json";

/// Parse either snapshot document
///
/// Documents carrying `files` or `rootMainFiles` are read as extended
/// snapshots; anything else must be the compat map.
pub fn parse_snapshot(contents: &str) -> serde_json::Result<Snapshot> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    let is_extended = value
        .as_object()
        .is_some_and(|o| o.contains_key("files") || o.contains_key("rootMainFiles"));

    if is_extended {
        serde_json::from_value(value)
    } else {
        let compat: BTreeMap<String, SizeEntry> = serde_json::from_value(value)?;
        Ok(Snapshot::from_compat(compat))
    }
}

/// Load a snapshot document named explicitly by the user
///
/// Unlike [`SnapshotStorage::load_optional`], a missing or malformed file is
/// an error here.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, BundleDeltaError> {
    read_snapshot_with_fs(path, &RealFileSystem)
}

/// Load a named snapshot document with a custom filesystem implementation
pub fn read_snapshot_with_fs<FS: FileSystem>(
    path: &Path,
    fs: &FS,
) -> Result<Snapshot, BundleDeltaError> {
    let contents = fs
        .read_to_string(path)
        .map_err(|source| BundleDeltaError::SnapshotUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    parse_snapshot(&contents).map_err(|e| BundleDeltaError::SnapshotInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Handles snapshot persistence in a history directory
pub struct SnapshotStorage<FS: FileSystem = RealFileSystem> {
    history_dir: PathBuf,
    fs: FS,
}

impl SnapshotStorage<RealFileSystem> {
    /// Create storage on the real filesystem
    pub fn new(history_dir: &Path) -> Self {
        Self::with_fs(history_dir, RealFileSystem)
    }
}

impl<FS: FileSystem> SnapshotStorage<FS> {
    /// Create storage with a custom filesystem implementation
    pub fn with_fs(history_dir: &Path, fs: FS) -> Self {
        Self {
            history_dir: history_dir.to_path_buf(),
            fs,
        }
    }

    /// Path of the compat document
    pub fn compat_path(&self) -> PathBuf {
        self.history_dir.join(COMPAT_FILE)
    }

    /// Path of the extended document
    pub fn extended_path(&self) -> PathBuf {
        self.history_dir.join(EXTENDED_FILE)
    }

    /// Load one snapshot document, treating any failure as absence
    pub fn load_optional(&self, path: &Path) -> Option<Snapshot> {
        let contents = match self.fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("no snapshot at {}: {}", path.display(), e);
                return None;
            }
        };
        match parse_snapshot(&contents) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("ignoring unreadable snapshot {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Load the previous run, preferring the extended document
    pub fn load_previous(&self) -> Option<Snapshot> {
        self.load_optional(&self.extended_path())
            .or_else(|| self.load_optional(&self.compat_path()))
    }

    /// Persist both documents, overwriting the previous run
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.fs
            .create_dir_all(&self.history_dir)
            .map_err(|source| BundleDeltaError::Io {
                context: format!("creating {}", self.history_dir.display()),
                source,
            })?;

        let compat = serde_json::to_string_pretty(&snapshot.to_compat())
            .context("Failed to serialize compat snapshot")?;
        let extended =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;

        for (path, contents) in [
            (self.compat_path(), compat),
            (self.extended_path(), extended),
        ] {
            self.fs
                .write(&path, contents.as_bytes())
                .map_err(|source| BundleDeltaError::Io {
                    context: format!("writing {}", path.display()),
                    source,
                })?;
        }

        log::info!("saved snapshot to {}", self.history_dir.display());
        Ok(())
    }
}
