//! Markdown fragment for code-review comments

use super::{by_delta_magnitude, by_size};
use crate::diff::{DiffResult, SizeChange};
use crate::fmt::{format_bytes, format_signed_bytes};
use crate::snapshot::SizeEntry;

/// Heading of every fragment
pub const MARKDOWN_HEADING: &str = "### Bundle size changes";

/// Render changed, added and removed files as markdown tables
pub fn render_markdown(diff: &DiffResult) -> String {
    let mut out = String::new();
    out.push_str(MARKDOWN_HEADING);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Global: raw {} ({}), gzip {} ({})\n",
        format_bytes(diff.global.current.raw),
        format_signed_bytes(diff.global.delta.raw),
        format_bytes(diff.global.current.gzip),
        format_signed_bytes(diff.global.delta.gzip)
    ));

    if diff.changed_files.is_empty() && diff.new_files.is_empty() && diff.removed_files.is_empty() {
        out.push_str("\nNo bundle size changes.\n");
        return out;
    }

    if !diff.changed_files.is_empty() {
        let rows = by_delta_magnitude(&diff.changed_files);
        table(&mut out, "Changed files", rows, |c| {
            (
                changed_cell(c.previous.raw, c.current.raw, c.delta.raw),
                changed_cell(c.previous.gzip, c.current.gzip, c.delta.gzip),
            )
        });
    }
    if !diff.new_files.is_empty() {
        let rows = by_size(&diff.new_files, |c| c.current);
        table(&mut out, "Added files", rows, |c| size_cells(c.current));
    }
    if !diff.removed_files.is_empty() {
        let rows = by_size(&diff.removed_files, |c| c.previous);
        table(&mut out, "Removed files", rows, |c| size_cells(c.previous));
    }

    out
}

fn table<F>(out: &mut String, title: &str, rows: Vec<&SizeChange>, cells: F)
where
    F: Fn(&SizeChange) -> (String, String),
{
    out.push_str(&format!("\n#### {}\n\n", title));
    out.push_str("| File | Raw | Gzip |\n");
    out.push_str("| --- | ---: | ---: |\n");
    for row in rows {
        let (raw, gzip) = cells(row);
        out.push_str(&format!("| `{}` | {} | {} |\n", row.name, raw, gzip));
    }
}

fn changed_cell(previous: u64, current: u64, delta: i64) -> String {
    format!(
        "{} → {} ({})",
        format_bytes(previous),
        format_bytes(current),
        format_signed_bytes(delta)
    )
}

fn size_cells(size: SizeEntry) -> (String, String) {
    (format_bytes(size.raw), format_bytes(size.gzip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::snapshot::Snapshot;

    fn snapshot(files: &[(&str, u64, u64)]) -> Snapshot {
        Snapshot {
            files: files
                .iter()
                .map(|(n, r, g)| (n.to_string(), SizeEntry::new(*r, *g)))
                .collect(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_markdown_contains_one_table_per_bucket() {
        let previous = snapshot(&[("a.js", 200, 80), ("c.js", 100, 40)]);
        let current = snapshot(&[("b.js", 300, 120), ("c.js", 150, 55)]);
        let md = render_markdown(&DiffEngine::diff(Some(&previous), &current));

        assert!(md.starts_with(MARKDOWN_HEADING));
        assert!(md.contains("#### Changed files"));
        assert!(md.contains("| `c.js` | 100 B → 150 B (+50 B) | 40 B → 55 B (+15 B) |"));
        assert!(md.contains("#### Added files"));
        assert!(md.contains("| `b.js` | 300 B | 120 B |"));
        assert!(md.contains("#### Removed files"));
        assert!(md.contains("| `a.js` | 200 B | 80 B |"));
    }

    #[test]
    fn test_markdown_rows_follow_report_ordering() {
        let previous = snapshot(&[]);
        let current = snapshot(&[("small.js", 10, 5), ("large.js", 1000, 400)]);
        let md = render_markdown(&DiffEngine::diff(Some(&previous), &current));
        let large = md.find("large.js").unwrap();
        let small = md.find("small.js").unwrap();
        assert!(large < small);
    }

    #[test]
    fn test_markdown_without_file_changes_says_so() {
        let s = snapshot(&[("a.js", 1, 1)]);
        let md = render_markdown(&DiffEngine::diff(Some(&s), &s));
        assert!(md.contains("No bundle size changes."));
        assert!(!md.contains("| File |"));
    }
}
