//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::BundleDeltaError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bundle-delta.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_delta::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Build output: {}", config.build_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(BundleDeltaError::Io {
                    context: format!("reading {}", config_path.display()),
                    source: e,
                })
                .context("Failed to read .bundle-delta.toml");
            }
        };

        let config: ConfigFile = toml_edit::de::from_str(&contents)
            .map_err(|e| BundleDeltaError::Config(format!("{}: {}", CONFIG_FILE_NAME, e)))?;
        config.validate()?;

        log::debug!("loaded {}", config_path.display());
        Ok(config)
    }
}
