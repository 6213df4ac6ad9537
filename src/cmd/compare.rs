//! Compare command implementation
//!
//! Handles `bundle-delta compare`, which diffs two saved snapshot files
//! (extended or compat shape) without touching any build output.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::diff::DiffEngine;
use crate::fmt::{icon, CHART};
use crate::report::{JsonReport, Reporter};
use crate::snapshot::read_snapshot;

/// Compare two saved snapshots
///
/// # Examples
///
/// ```no_run
/// use bundle_delta::cmd::compare::cmd_compare;
/// use std::path::Path;
///
/// cmd_compare(
///     Path::new("main/sizes.extended.json"),
///     Path::new(".bundle-delta/sizes.extended.json"),
///     false,
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if either file is missing or is not a snapshot.
pub fn cmd_compare(previous: &Path, current: &Path, json: bool) -> Result<()> {
    let previous = read_snapshot(previous)?;
    let current = read_snapshot(current)?;

    let diff = DiffEngine::diff(Some(&previous), &current);

    if json {
        JsonReport::new(&diff, true).print();
        return Ok(());
    }

    eprintln!(
        "{}{} Snapshot Comparison",
        icon(CHART),
        style("bundle-delta").bold()
    );
    eprintln!();
    Reporter::new().print(&diff, &current);
    eprintln!();
    eprintln!("   {}", style(diff.summary()).dim());
    Ok(())
}
