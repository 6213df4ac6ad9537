//! Rendering of diff results
//!
//! Every listing is sorted explicitly so that identical input always yields
//! identical output, independent of map iteration order:
//!
//! - changed files and pages: largest gzip delta first, then largest raw
//!   delta, then name
//! - new and removed files: largest gzip size first, then largest raw size,
//!   then name
//! - routes: by route path

mod comment;
mod json;
mod markdown;
mod text;

pub use comment::CommentWriter;
pub use json::JsonReport;
pub use markdown::render_markdown;
pub use text::{Reporter, UNRESOLVED};

use crate::diff::{RouteChange, SizeChange};
use crate::snapshot::SizeEntry;
use std::cmp::Ordering;

/// Changes ordered by descending delta magnitude
pub fn by_delta_magnitude(changes: &[SizeChange]) -> Vec<&SizeChange> {
    let mut sorted: Vec<&SizeChange> = changes.iter().collect();
    sorted.sort_by(|a, b| {
        b.delta
            .gzip
            .unsigned_abs()
            .cmp(&a.delta.gzip.unsigned_abs())
            .then_with(|| b.delta.raw.unsigned_abs().cmp(&a.delta.raw.unsigned_abs()))
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Changes ordered by descending size, read from the side that exists
pub fn by_size<F>(changes: &[SizeChange], size_of: F) -> Vec<&SizeChange>
where
    F: Fn(&SizeChange) -> SizeEntry,
{
    let mut sorted: Vec<&SizeChange> = changes.iter().collect();
    sorted.sort_by(|a, b| compare_size_desc(size_of(a), size_of(b)).then_with(|| a.name.cmp(&b.name)));
    sorted
}

/// Routes ordered by path
pub fn by_route(routes: &[RouteChange]) -> Vec<&RouteChange> {
    let mut sorted: Vec<&RouteChange> = routes.iter().collect();
    sorted.sort_by(|a, b| a.route.cmp(&b.route));
    sorted
}

fn compare_size_desc(a: SizeEntry, b: SizeEntry) -> Ordering {
    b.gzip.cmp(&a.gzip).then_with(|| b.raw.cmp(&a.raw))
}
