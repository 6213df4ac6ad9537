//! Loading of the bundler manifests that feed a snapshot
//!
//! Three JSON documents are read from the build output root:
//!
//! - `build-manifest.json` (required): `rootMainFiles` is the global file
//!   list, `pages` maps page identifiers to their scripts
//! - `app-build-manifest.json` (optional): more `pages`, merged on top
//! - `app-path-routes-manifest.json` (optional): route identifier to route path
//!
//! The required manifest is fatal when missing or malformed. Optional ones
//! fall back to empty maps with a warning.

use crate::error::BundleDeltaError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::measure::normalize_key;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Required manifest carrying the global file list
pub const BUILD_MANIFEST: &str = "build-manifest.json";
/// Optional manifest with additional page bundles
pub const APP_BUILD_MANIFEST: &str = "app-build-manifest.json";
/// Optional manifest mapping route identifiers to route paths
pub const ROUTES_MANIFEST: &str = "app-path-routes-manifest.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildManifest {
    root_main_files: Vec<String>,
    #[serde(default)]
    pages: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct AppBuildManifest {
    #[serde(default)]
    pages: BTreeMap<String, Vec<String>>,
}

/// Everything a snapshot is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSet {
    /// Global/shared scripts, in manifest order
    pub root_main_files: Vec<String>,
    /// Page identifier to its scripts
    pub pages: BTreeMap<String, Vec<String>>,
    /// Route identifier to route path
    pub routes: BTreeMap<String, String>,
}

/// Reads manifests from a build output root
pub struct ManifestLoader<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl ManifestLoader<RealFileSystem> {
    /// Create a loader on the real filesystem
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl Default for ManifestLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> ManifestLoader<FS> {
    /// Create a loader with a custom filesystem implementation
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    /// Load all manifests below `build_dir`
    ///
    /// # Errors
    ///
    /// Fails when `build_dir` is not a directory or when
    /// `build-manifest.json` is missing, unreadable or malformed.
    pub fn load(&self, build_dir: &Path) -> Result<ManifestSet> {
        if !self.fs.is_dir(build_dir) {
            return Err(BundleDeltaError::BuildDirNotFound {
                path: build_dir.to_path_buf(),
            }
            .into());
        }

        let build = self.load_required(build_dir)?;
        let app: AppBuildManifest = self.load_optional(&build_dir.join(APP_BUILD_MANIFEST));
        let routes: BTreeMap<String, String> =
            self.load_optional(&build_dir.join(ROUTES_MANIFEST));

        let mut root_main_files = Vec::with_capacity(build.root_main_files.len());
        for file in build.root_main_files.iter().map(|f| normalize_key(f)) {
            if !root_main_files.contains(&file) {
                root_main_files.push(file);
            }
        }

        let mut pages = BTreeMap::new();
        for (page, files) in build.pages.into_iter().chain(app.pages) {
            let files = files.iter().map(|f| normalize_key(f)).collect();
            pages.insert(page, files);
        }

        log::info!(
            "loaded {} global file(s), {} page(s), {} route(s)",
            root_main_files.len(),
            pages.len(),
            routes.len()
        );

        Ok(ManifestSet {
            root_main_files,
            pages,
            routes,
        })
    }

    fn load_required(&self, build_dir: &Path) -> Result<BuildManifest> {
        let path = build_dir.join(BUILD_MANIFEST);
        let contents = match self.fs.read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BundleDeltaError::ManifestNotFound { path }.into());
            }
            Err(source) => {
                return Err(BundleDeltaError::Io {
                    context: format!("reading {}", path.display()),
                    source,
                }
                .into());
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            BundleDeltaError::ManifestInvalid {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn load_optional<T: DeserializeOwned + Default>(&self, path: &Path) -> T {
        let contents = match self.fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not present, using empty default", path.display());
                return T::default();
            }
            Err(e) => {
                log::warn!("cannot read {}: {}; using empty default", path.display(), e);
                return T::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("cannot parse {}: {}; using empty default", path.display(), e);
            T::default()
        })
    }
}
