//! Snapshot model, construction and persistence
//!
//! A [`Snapshot`] is the immutable record of one analysis run. It is built
//! from the bundler manifests by [`SnapshotBuilder`], compared against the
//! previous run, and then written by [`SnapshotStorage`] for the next run.

mod builder;
mod model;
mod storage;

pub use builder::SnapshotBuilder;
pub use model::{RouteInfo, SizeDelta, SizeEntry, Snapshot, COMPAT_GLOBAL_KEY};
pub use storage::{
    parse_snapshot, read_snapshot, read_snapshot_with_fs, SnapshotStorage, COMPAT_FILE,
    DEFAULT_HISTORY_DIR, EXTENDED_FILE,
};
