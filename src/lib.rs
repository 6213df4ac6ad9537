#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-delta library
//!
//! This library measures the raw and gzip size of a web build's script
//! bundles, aggregates them per page, and diffs the result against the
//! previous run. It can be used programmatically in addition to the CLI.
//!
//! # Basic Example
//!
//! Diffing two snapshots:
//!
//! ```
//! use bundle_delta::diff::DiffEngine;
//! use bundle_delta::snapshot::{SizeEntry, Snapshot};
//!
//! let previous = Snapshot {
//!     global: SizeEntry::new(100, 40),
//!     ..Snapshot::default()
//! };
//! let current = Snapshot {
//!     global: SizeEntry::new(150, 55),
//!     ..Snapshot::default()
//! };
//!
//! let diff = DiffEngine::diff(Some(&previous), &current);
//! assert_eq!(diff.global.delta.raw, 50);
//! assert_eq!(diff.global.delta.gzip, 15);
//! ```
//!
//! # Advanced Example: Measuring a Build
//!
//! Every file is read and compressed at most once per [`measure::SizeCache`]:
//!
//! ```
//! use bundle_delta::measure::{Aggregator, SizeCache, SizeMeasurer};
//! use std::collections::HashSet;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let build = TempDir::new().unwrap();
//! fs::write(build.path().join("main.js"), "console.log(1)").unwrap();
//! fs::write(build.path().join("page.js"), "export default 1").unwrap();
//!
//! let cache = SizeCache::new();
//! let measurer = SizeMeasurer::new(build.path(), &cache);
//! let global: HashSet<String> = ["main.js".to_string()].into();
//!
//! let page = Aggregator::new(&measurer).sum(&["main.js", "page.js"], &global);
//! assert_eq!(page.raw, 16);
//! assert_eq!(measurer.measure("main.js").raw, 14);
//! ```

/// Command-line interface definition
pub mod cli;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading
pub mod config;
/// Snapshot comparison
pub mod diff;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Build manifest boundary
pub mod manifest;
/// File size measurement and aggregation
pub mod measure;
/// Text, markdown and JSON rendering
pub mod report;
/// Route identifier to source file resolution
pub mod route;
/// Snapshot model, construction and persistence
pub mod snapshot;
