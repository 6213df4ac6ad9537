//! Construction of a [`Snapshot`] from loaded manifests

use super::model::{RouteInfo, Snapshot};
use crate::infra::FileSystem;
use crate::manifest::ManifestSet;
use crate::measure::{Aggregator, SizeMeasurer};
use crate::route::RouteResolver;
use std::collections::{BTreeMap, HashSet};

/// Builds the current run's snapshot in a single measuring pass
pub struct SnapshotBuilder<'m, 'c, 'r, FS: FileSystem, RFS: FileSystem> {
    measurer: &'m SizeMeasurer<'c, FS>,
    resolver: &'r RouteResolver<RFS>,
    parallel: bool,
}

impl<'m, 'c, 'r, FS: FileSystem, RFS: FileSystem> SnapshotBuilder<'m, 'c, 'r, FS, RFS> {
    /// Create a builder from a measurer and a route resolver
    pub fn new(measurer: &'m SizeMeasurer<'c, FS>, resolver: &'r RouteResolver<RFS>) -> Self {
        Self {
            measurer,
            resolver,
            parallel: false,
        }
    }

    /// Measure all referenced files in parallel before aggregating
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Measure, aggregate and resolve everything `manifests` references
    pub fn build(&self, manifests: &ManifestSet) -> Snapshot {
        let all_files = manifests
            .root_main_files
            .iter()
            .chain(manifests.pages.values().flatten());

        if self.parallel {
            self.measurer.prefetch(all_files.clone().map(String::as_str));
        }

        let aggregator = Aggregator::new(self.measurer);
        let global_set: HashSet<String> = manifests.root_main_files.iter().cloned().collect();

        let global = aggregator.sum(&manifests.root_main_files, &HashSet::new());

        let pages = manifests
            .pages
            .iter()
            .map(|(page, files)| (page.clone(), aggregator.sum(files, &global_set)))
            .collect();

        let files = all_files
            .map(|file| (file.clone(), self.measurer.measure(file)))
            .collect();

        let routes = manifests
            .routes
            .iter()
            .map(|(identifier, route)| {
                let source_file = self
                    .resolver
                    .resolve(identifier)
                    .map(|path| path.to_string_lossy().replace('\\', "/"));
                (
                    route.clone(),
                    RouteInfo {
                        source: identifier.clone(),
                        source_file,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        let stats = self.measurer.cache().stats();
        log::info!(
            "snapshot built: {} file(s) measured, {} cache hit(s)",
            stats.measured,
            stats.hits
        );

        Snapshot {
            global,
            pages,
            files,
            routes,
            root_main_files: manifests.root_main_files.clone(),
        }
    }
}
