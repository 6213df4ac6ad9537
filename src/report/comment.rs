//! Review comment file maintenance

use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Appends markdown fragments to a comment file
pub struct CommentWriter<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl CommentWriter<RealFileSystem> {
    /// Create a writer for `path` on the real filesystem
    pub fn new(path: &Path) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> CommentWriter<FS> {
    /// Create a writer with a custom filesystem implementation
    pub fn with_fs(path: &Path, fs: FS) -> Self {
        Self {
            path: path.to_path_buf(),
            fs,
        }
    }

    /// Append `fragment`, creating the file when missing
    ///
    /// Existing content that cannot be read is treated as empty.
    pub fn append(&self, fragment: &str) -> Result<()> {
        let mut contents = match self.fs.read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("ignoring unreadable {}: {}", self.path.display(), e);
                }
                String::new()
            }
        };

        if !contents.is_empty() {
            if !contents.ends_with('\n') {
                contents.push('\n');
            }
            contents.push('\n');
        }
        contents.push_str(fragment);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        self.fs
            .write(&self.path, contents.as_bytes())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Append without failing the run; returns whether the write succeeded
    pub fn append_best_effort(&self, fragment: &str) -> bool {
        match self.append(fragment) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("comment not written: {:#}", e);
                false
            }
        }
    }
}
