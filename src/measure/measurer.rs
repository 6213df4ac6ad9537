//! Raw and gzip size measurement of individual files

use super::cache::SizeCache;
use crate::infra::{FileSystem, RealFileSystem};
use crate::snapshot::SizeEntry;
use flate2::write::GzEncoder;
use flate2::Compression;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Measures files below a build output root, memoized through a [`SizeCache`]
pub struct SizeMeasurer<'c, FS: FileSystem = RealFileSystem> {
    root: PathBuf,
    canonical_root: PathBuf,
    fs: FS,
    cache: &'c SizeCache,
}

impl<'c> SizeMeasurer<'c, RealFileSystem> {
    /// Create a measurer for `root` backed by the real filesystem
    pub fn new(root: &Path, cache: &'c SizeCache) -> Self {
        Self::with_fs(root, RealFileSystem, cache)
    }
}

impl<'c, FS: FileSystem> SizeMeasurer<'c, FS> {
    /// Create a measurer with a custom filesystem implementation
    pub fn with_fs(root: &Path, fs: FS, cache: &'c SizeCache) -> Self {
        let root = normalize_lexically(
            &std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf()),
        );
        let canonical_root = fs.canonicalize(&root).unwrap_or_else(|_| root.clone());
        Self {
            root,
            canonical_root,
            fs,
            cache,
        }
    }

    /// The cache backing this measurer
    pub fn cache(&self) -> &SizeCache {
        self.cache
    }

    /// Resolve a build-relative path to the absolute cache key
    ///
    /// Existing files are canonicalized so that different spellings of the
    /// same file share an entry; missing files are normalized lexically.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let joined = self.root.join(relative);
        self.fs
            .canonicalize(&joined)
            .unwrap_or_else(|_| normalize_lexically(&joined))
    }

    /// Raw and gzip size of a build-relative file
    ///
    /// A missing file measures `{0, 0}`. Repeated calls for the same resolved
    /// path are answered from the cache without reading the file again.
    pub fn measure(&self, relative: &str) -> SizeEntry {
        let key = self.resolve(relative);
        if let Some(entry) = self.cache.get(&key) {
            return entry;
        }
        let entry = self.measure_uncached(&key);
        self.cache.insert(key, entry)
    }

    /// Measure many files in parallel, filling the cache
    ///
    /// Paths are resolved and deduplicated before any worker starts, so each
    /// distinct file is still read and compressed exactly once.
    pub fn prefetch<'a, I>(&self, relatives: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pending: BTreeSet<PathBuf> = relatives
            .into_iter()
            .map(|relative| self.resolve(relative))
            .filter(|key| !self.cache.contains(key))
            .collect();

        log::debug!("prefetching {} file(s)", pending.len());

        pending
            .into_par_iter()
            .map(|key| {
                let entry = self.measure_uncached(&key);
                (key, entry)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .for_each(|(key, entry)| {
                self.cache.insert(key, entry);
            });
    }

    fn is_inside_root(&self, path: &Path) -> bool {
        path.starts_with(&self.root) || path.starts_with(&self.canonical_root)
    }

    fn measure_uncached(&self, path: &Path) -> SizeEntry {
        if !self.is_inside_root(path) {
            log::warn!(
                "{} is outside the build root {}; counting as empty",
                path.display(),
                self.root.display()
            );
            return SizeEntry::ZERO;
        }

        let bytes = match self.fs.read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, counting as empty", path.display());
                return SizeEntry::ZERO;
            }
            Err(e) => {
                log::warn!("cannot read {}: {}; counting as empty", path.display(), e);
                return SizeEntry::ZERO;
            }
        };

        let raw = bytes.len() as u64;
        match gzip_size(&bytes) {
            Ok(gzip) => {
                log::debug!("measured {}: {} B raw, {} B gzip", path.display(), raw, gzip);
                SizeEntry::new(raw, gzip)
            }
            Err(e) => {
                log::warn!("cannot compress {}: {}", path.display(), e);
                SizeEntry::new(raw, 0)
            }
        }
    }
}

/// Byte length of `content` after gzip at the default compression level
///
/// The gzip header written by flate2 carries no timestamp or file name, so
/// the result depends on the content alone.
pub fn gzip_size(content: &[u8]) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    Ok(encoder.finish()?.len() as u64)
}

/// Normalize a manifest path into a file map key
///
/// Strips leading `/` and `./` segments and converts backslashes so that
/// keys stay relative to the build root and manifests written on different
/// platforms produce identical keys.
pub fn normalize_key(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let mut key = forward.as_str();
    loop {
        if let Some(rest) = key.strip_prefix("./") {
            key = rest;
        } else if let Some(rest) = key.strip_prefix('/') {
            key = rest;
        } else {
            break;
        }
    }
    key.to_string()
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
