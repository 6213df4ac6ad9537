//! Summation of file sizes into bundle totals

use super::measurer::SizeMeasurer;
use crate::infra::FileSystem;
use crate::snapshot::SizeEntry;
use std::collections::HashSet;

/// Sums measured file sizes into global and per-page totals
pub struct Aggregator<'m, 'c, FS: FileSystem> {
    measurer: &'m SizeMeasurer<'c, FS>,
}

impl<'m, 'c, FS: FileSystem> Aggregator<'m, 'c, FS> {
    /// Create an aggregator over a measurer
    pub fn new(measurer: &'m SizeMeasurer<'c, FS>) -> Self {
        Self { measurer }
    }

    /// Total size of `paths`, skipping every path in `exclude`
    ///
    /// A path listed several times counts once. Excluded paths never
    /// contribute, however often they are listed.
    pub fn sum<S: AsRef<str>>(&self, paths: &[S], exclude: &HashSet<String>) -> SizeEntry {
        let mut seen = HashSet::new();
        paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| !exclude.contains(*path))
            .filter(|path| seen.insert(*path))
            .map(|path| self.measurer.measure(path))
            .fold(SizeEntry::ZERO, |total, entry| total + entry)
    }
}
