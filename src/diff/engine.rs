//! Snapshot comparison

use super::model::{DiffResult, GlobalChange, RouteChange, SizeChange};
use crate::snapshot::{SizeEntry, Snapshot};
use std::collections::{BTreeMap, BTreeSet};

/// Compares a previous snapshot against the current one
pub struct DiffEngine;

impl DiffEngine {
    /// Classify every difference between `previous` and `current`
    ///
    /// An absent `previous` behaves as an empty snapshot: every file and
    /// route is new and every non-empty page changes against zero.
    pub fn diff(previous: Option<&Snapshot>, current: &Snapshot) -> DiffResult {
        let empty = Snapshot::default();
        let previous = previous.unwrap_or(&empty);

        let (changed_files, new_files, removed_files) =
            Self::diff_files(&previous.files, &current.files);
        let (new_routes, removed_routes) = Self::diff_routes(previous, current);

        let result = DiffResult {
            global: GlobalChange {
                previous: previous.global,
                current: current.global,
                delta: current.global - previous.global,
            },
            changed_files,
            new_files,
            removed_files,
            changed_pages: Self::diff_pages(&previous.pages, &current.pages),
            new_routes,
            removed_routes,
        };

        log::debug!("diff: {}", result.summary());
        result
    }

    fn diff_files(
        previous: &BTreeMap<String, SizeEntry>,
        current: &BTreeMap<String, SizeEntry>,
    ) -> (Vec<SizeChange>, Vec<SizeChange>, Vec<SizeChange>) {
        let mut changed = Vec::new();
        let mut added = Vec::new();
        let mut removed = Vec::new();

        for name in union_keys(previous, current) {
            match (previous.get(name), current.get(name)) {
                (None, Some(&curr)) => added.push(SizeChange::new(name, SizeEntry::ZERO, curr)),
                (Some(&prev), None) => removed.push(SizeChange::new(name, prev, SizeEntry::ZERO)),
                (Some(&prev), Some(&curr)) => {
                    let change = SizeChange::new(name, prev, curr);
                    if !change.delta.is_zero() {
                        changed.push(change);
                    }
                }
                (None, None) => {}
            }
        }

        (changed, added, removed)
    }

    fn diff_pages(
        previous: &BTreeMap<String, SizeEntry>,
        current: &BTreeMap<String, SizeEntry>,
    ) -> Vec<SizeChange> {
        union_keys(previous, current)
            .into_iter()
            .map(|name| {
                SizeChange::new(
                    name,
                    previous.get(name).copied().unwrap_or_default(),
                    current.get(name).copied().unwrap_or_default(),
                )
            })
            .filter(|change| !change.delta.is_zero())
            .collect()
    }

    fn diff_routes(previous: &Snapshot, current: &Snapshot) -> (Vec<RouteChange>, Vec<RouteChange>) {
        let only_in = |this: &Snapshot, other: &Snapshot| -> Vec<RouteChange> {
            this.routes
                .keys()
                .filter(|route| !other.routes.contains_key(*route))
                .map(|route| RouteChange {
                    route: route.clone(),
                    source_file: this.route_source(route).map(str::to_string),
                })
                .collect()
        };

        (only_in(current, previous), only_in(previous, current))
    }
}

fn union_keys<'a, V>(a: &'a BTreeMap<String, V>, b: &'a BTreeMap<String, V>) -> BTreeSet<&'a str> {
    a.keys().chain(b.keys()).map(String::as_str).collect()
}
