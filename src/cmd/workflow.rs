//! Analyze workflow orchestration
//!
//! This module holds the pipeline behind `bundle-delta analyze`, separated
//! from presentation so that it can be driven programmatically or from tests.
//!
//! # Architecture
//!
//! 1. **Manifests**: the build output root and `build-manifest.json` must
//!    exist; page and route manifests are optional.
//! 2. **Measurement**: every referenced file is measured once through a
//!    per-run [`SizeCache`] and aggregated into the current [`Snapshot`].
//! 3. **Diff**: the previous snapshot, if any, is loaded from the history
//!    directory and compared with the current one.
//! 4. **Persistence**: the optional review comment is appended and the
//!    current snapshot replaces the previous one.
//!
//! # Examples
//!
//! ```no_run
//! use bundle_delta::cmd::workflow::AnalyzeWorkflow;
//! use bundle_delta::config::ConfigFile;
//! use std::path::Path;
//!
//! let workflow = AnalyzeWorkflow::new(Path::new("."), ConfigFile::default());
//! let result = workflow.execute()?;
//! println!("{}", result.diff.summary());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ConfigFile;
use crate::diff::{DiffEngine, DiffResult};
use crate::manifest::ManifestLoader;
use crate::measure::{CacheStats, SizeCache, SizeMeasurer};
use crate::report::{render_markdown, CommentWriter};
use crate::route::RouteResolver;
use crate::snapshot::{Snapshot, SnapshotBuilder, SnapshotStorage};

/// Result of one analyze run
#[derive(Debug)]
pub struct AnalyzeResult {
    /// Snapshot of the current build
    pub current: Snapshot,
    /// Whether a previous snapshot was found
    pub has_baseline: bool,
    /// Classified differences against the previous snapshot
    pub diff: DiffResult,
    /// Measurement cache statistics
    pub cache_stats: CacheStats,
    /// Comment file the fragment was appended to, when that succeeded
    pub comment_written: Option<PathBuf>,
    /// Whether the current snapshot was persisted
    pub saved: bool,
}

/// Analyze workflow orchestrator
pub struct AnalyzeWorkflow {
    project_root: PathBuf,
    config: ConfigFile,
    save: bool,
    parallel: bool,
}

impl AnalyzeWorkflow {
    /// Create a workflow for the given project with resolved configuration
    pub fn new(project_root: &Path, config: ConfigFile) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            save: true,
            parallel: true,
        }
    }

    /// Skip persisting the current snapshot
    pub fn save(mut self, enabled: bool) -> Self {
        self.save = enabled;
        self
    }

    /// Measure files in parallel before aggregation
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Execute the complete analyze workflow
    pub fn execute(&self) -> Result<AnalyzeResult> {
        let build_dir = self.config.build_dir_in(&self.project_root);

        // Phase 1: manifests (fatal on failure)
        log::info!("loading manifests from {}", build_dir.display());
        let manifests = ManifestLoader::new().load(&build_dir)?;

        // Phase 2: measure into the current snapshot
        let cache = SizeCache::new();
        let measurer = SizeMeasurer::new(&build_dir, &cache);
        let resolver = RouteResolver::new(&self.project_root, Path::new(&self.config.app_dir))
            .with_prefix(&self.config.app_prefix);
        let current = SnapshotBuilder::new(&measurer, &resolver)
            .parallel(self.parallel)
            .build(&manifests);
        let cache_stats = cache.stats();

        // Phase 3: diff against the previous run
        let storage = SnapshotStorage::new(&self.config.history_dir_in(&self.project_root));
        let previous = storage.load_previous();
        if previous.is_none() {
            log::info!("no previous snapshot, treating everything as new");
        }
        let diff = DiffEngine::diff(previous.as_ref(), &current);
        log::info!("{}", diff.summary());

        // Phase 4: comment and persistence
        let comment_written = self.write_comment(&diff);

        if self.save {
            storage.save(&current)?;
        }

        Ok(AnalyzeResult {
            current,
            has_baseline: previous.is_some(),
            diff,
            cache_stats,
            comment_written,
            saved: self.save,
        })
    }

    fn write_comment(&self, diff: &DiffResult) -> Option<PathBuf> {
        let path = self.config.comment_file_in(&self.project_root)?;
        let fragment = render_markdown(diff);
        CommentWriter::new(&path)
            .append_best_effort(&fragment)
            .then_some(path)
    }
}
