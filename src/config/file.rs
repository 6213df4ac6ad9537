//! Configuration file data structures

use crate::error::BundleDeltaError;
use crate::route::DEFAULT_ROUTE_PREFIX;
use crate::snapshot::DEFAULT_HISTORY_DIR;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-delta.toml";

/// Default build output root
pub const DEFAULT_BUILD_DIR: &str = ".next";

/// Default application source directory
pub const DEFAULT_APP_DIR: &str = "app";

/// bundle-delta configuration file structure
///
/// Relative paths are interpreted against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Build output root containing the manifests
    pub build_dir: String,

    /// Application source directory used for route resolution
    pub app_dir: String,

    /// Logical root stripped from route identifiers
    pub app_prefix: String,

    /// Directory holding the previous/current snapshot files
    pub history_dir: String,

    /// Markdown file the review fragment is appended to
    pub comment_file: Option<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            app_dir: DEFAULT_APP_DIR.to_string(),
            app_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            history_dir: DEFAULT_HISTORY_DIR.to_string(),
            comment_file: None,
        }
    }
}

/// Values supplied on the command line, taking precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--build-dir`
    pub build_dir: Option<String>,
    /// `--app-dir`
    pub app_dir: Option<String>,
    /// `--history-dir`
    pub history_dir: Option<String>,
    /// `--comment-file`
    pub comment_file: Option<String>,
}

impl ConfigFile {
    /// Reject empty path values
    ///
    /// The route prefix may be empty, which disables prefix stripping.
    pub fn validate(&self) -> Result<(), BundleDeltaError> {
        let required = [
            ("build-dir", &self.build_dir),
            ("app-dir", &self.app_dir),
            ("history-dir", &self.history_dir),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(BundleDeltaError::Config(format!("{} must not be empty", key)));
            }
        }
        if matches!(&self.comment_file, Some(f) if f.trim().is_empty()) {
            return Err(BundleDeltaError::Config(
                "comment-file must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.build_dir {
            self.build_dir = dir;
        }
        if let Some(dir) = overrides.app_dir {
            self.app_dir = dir;
        }
        if let Some(dir) = overrides.history_dir {
            self.history_dir = dir;
        }
        if overrides.comment_file.is_some() {
            self.comment_file = overrides.comment_file;
        }
        self
    }

    /// Build output root resolved against `project_root`
    pub fn build_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build_dir)
    }

    /// History directory resolved against `project_root`
    pub fn history_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.history_dir)
    }

    /// Comment file resolved against `project_root`, if configured
    pub fn comment_file_in(&self, project_root: &Path) -> Option<PathBuf> {
        self.comment_file.as_ref().map(|f| project_root.join(f))
    }
}
