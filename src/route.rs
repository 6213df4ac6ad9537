//! Best-effort mapping from route identifiers to their source files
//!
//! Route manifests name routes by a source-like identifier such as
//! `/blog/[slug]/page` or `app/api/health/route`. The resolver turns that
//! identifier into a path below the application source directory and checks
//! a fixed list of extensions. Page-level files are tried first, then the
//! handler form nested under a directory (`<path>/route.<ext>`).

use crate::infra::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};

/// Candidate extensions in priority order; the first existing file wins
pub const ROUTE_EXTENSIONS: [&str; 5] = ["tsx", "ts", "jsx", "js", "mdx"];

/// Default logical root stripped from route identifiers
pub const DEFAULT_ROUTE_PREFIX: &str = "app";

/// Resolves route identifiers against an application source directory
pub struct RouteResolver<FS: FileSystem = RealFileSystem> {
    project_root: PathBuf,
    app_dir: PathBuf,
    prefix: String,
    fs: FS,
}

impl RouteResolver<RealFileSystem> {
    /// Create a resolver on the real filesystem
    ///
    /// `app_dir` is relative to `project_root`; resolved paths are returned
    /// relative to `project_root` as well.
    pub fn new(project_root: &Path, app_dir: &Path) -> Self {
        Self::with_fs(project_root, app_dir, RealFileSystem)
    }
}

impl<FS: FileSystem> RouteResolver<FS> {
    /// Create a resolver with a custom filesystem implementation
    pub fn with_fs(project_root: &Path, app_dir: &Path, fs: FS) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            app_dir: app_dir.to_path_buf(),
            prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            fs,
        }
    }

    /// Override the logical root prefix stripped from identifiers
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.trim_matches('/').to_string();
        self
    }

    /// Strip the leading slash and the logical root prefix from an identifier
    pub fn normalize<'a>(&self, identifier: &'a str) -> &'a str {
        let trimmed = identifier.trim_start_matches('/');
        if self.prefix.is_empty() {
            return trimmed;
        }
        match trimmed.strip_prefix(self.prefix.as_str()) {
            Some("") => "",
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => trimmed,
        }
    }

    /// Source file of a route, relative to the project root
    ///
    /// Returns `None` when no candidate exists.
    pub fn resolve(&self, identifier: &str) -> Option<PathBuf> {
        let relative = self.normalize(identifier);
        let base = self.app_dir.join(relative);

        let page_level = ROUTE_EXTENSIONS.iter().map(|ext| {
            let mut file = base.clone().into_os_string();
            file.push(".");
            file.push(ext);
            PathBuf::from(file)
        });
        let nested = ROUTE_EXTENSIONS
            .iter()
            .map(|ext| base.join(format!("route.{}", ext)));

        let found = page_level
            .chain(nested)
            .find(|candidate| self.fs.is_file(&self.project_root.join(candidate)));

        match &found {
            Some(path) => log::debug!("route {} -> {}", identifier, path.display()),
            None => log::debug!("route {} has no source file", identifier),
        }
        found
    }
}
