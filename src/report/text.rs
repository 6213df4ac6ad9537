//! Line-oriented change log

use super::{by_delta_magnitude, by_route, by_size};
use crate::diff::{DiffResult, RouteChange, SizeChange};
use crate::fmt::{format_bytes, format_signed_bytes};
use crate::snapshot::{SizeDelta, Snapshot};
use std::fmt;

/// Marker printed for routes without a resolved source file
pub const UNRESOLVED: &str = "unresolved";

struct GlobalLine<'a> {
    global: &'a SizeDelta,
}

impl fmt::Display for GlobalLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"global":{{"raw":{},"gzip":{}}}}}"#,
            self.global.raw, self.global.gzip
        )
    }
}

/// Renders a [`DiffResult`] as ordered text lines
///
/// The first line is always the global delta as JSON, e.g.
/// `{"global":{"raw":50,"gzip":15}}`. Empty sections are omitted.
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Render the change log
    ///
    /// `current` supplies the global file list shown under every new route.
    pub fn render(&self, diff: &DiffResult, current: &Snapshot) -> Vec<String> {
        let mut lines = vec![global_line(&diff.global.delta)];

        if !diff.changed_files.is_empty() {
            lines.push("Changed files:".to_string());
            for change in by_delta_magnitude(&diff.changed_files) {
                lines.push(format!("  ~ {}", changed_detail(change)));
            }
        }

        if !diff.new_files.is_empty() {
            lines.push("New files:".to_string());
            for change in by_size(&diff.new_files, |c| c.current) {
                lines.push(format!(
                    "  + {}: raw {}, gzip {}",
                    change.name,
                    format_bytes(change.current.raw),
                    format_bytes(change.current.gzip)
                ));
            }
        }

        if !diff.removed_files.is_empty() {
            lines.push("Removed files:".to_string());
            for change in by_size(&diff.removed_files, |c| c.previous) {
                lines.push(format!(
                    "  - {}: raw {}, gzip {}",
                    change.name,
                    format_bytes(change.previous.raw),
                    format_bytes(change.previous.gzip)
                ));
            }
        }

        if !diff.changed_pages.is_empty() {
            lines.push("Page changes:".to_string());
            for change in by_delta_magnitude(&diff.changed_pages) {
                lines.push(format!("  ~ {}", changed_detail(change)));
            }
        }

        if !diff.new_routes.is_empty() {
            lines.push("New routes:".to_string());
            for route in by_route(&diff.new_routes) {
                lines.push(format!("  + {} ({})", route.route, source_label(route)));
                for file in &current.root_main_files {
                    let size = current.file_size(file);
                    lines.push(format!(
                        "      global {}: raw {}, gzip {}",
                        file,
                        format_bytes(size.raw),
                        format_bytes(size.gzip)
                    ));
                }
            }
        }

        if !diff.removed_routes.is_empty() {
            lines.push("Removed routes:".to_string());
            for route in by_route(&diff.removed_routes) {
                lines.push(format!("  - {} ({})", route.route, source_label(route)));
            }
        }

        lines
    }

    /// Print the change log to stdout
    pub fn print(&self, diff: &DiffResult, current: &Snapshot) {
        for line in self.render(diff, current) {
            println!("{}", line);
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

fn global_line(delta: &SizeDelta) -> String {
    GlobalLine { global: delta }.to_string()
}

fn changed_detail(change: &SizeChange) -> String {
    format!(
        "{}: raw {} -> {} ({}), gzip {} -> {} ({})",
        change.name,
        format_bytes(change.previous.raw),
        format_bytes(change.current.raw),
        format_signed_bytes(change.delta.raw),
        format_bytes(change.previous.gzip),
        format_bytes(change.current.gzip),
        format_signed_bytes(change.delta.gzip)
    )
}

fn source_label(route: &RouteChange) -> &str {
    route.source_file.as_deref().unwrap_or(UNRESOLVED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::snapshot::{RouteInfo, SizeEntry};

    fn previous() -> Snapshot {
        let mut s = Snapshot {
            global: SizeEntry::new(100, 40),
            root_main_files: vec!["static/main.js".into()],
            ..Snapshot::default()
        };
        s.files.insert("static/main.js".into(), SizeEntry::new(100, 40));
        s.files.insert("a.js".into(), SizeEntry::new(200, 80));
        s.files.insert("c.js".into(), SizeEntry::new(10, 9));
        s.pages.insert("/blog".into(), SizeEntry::new(10, 9));
        s.routes.insert(
            "/old".into(),
            RouteInfo {
                source: "/old/page".into(),
                source_file: Some("app/old/page.tsx".into()),
            },
        );
        s
    }

    fn current() -> Snapshot {
        let mut s = Snapshot {
            global: SizeEntry::new(150, 55),
            root_main_files: vec!["static/main.js".into()],
            ..Snapshot::default()
        };
        s.files.insert("static/main.js".into(), SizeEntry::new(150, 55));
        s.files.insert("b.js".into(), SizeEntry::new(300, 120));
        s.files.insert("c.js".into(), SizeEntry::new(10, 9));
        s.pages.insert("/blog".into(), SizeEntry::new(20, 12));
        s.routes.insert(
            "/about".into(),
            RouteInfo {
                source: "/about/page".into(),
                source_file: None,
            },
        );
        s
    }

    #[test]
    fn test_first_line_is_global_delta_json() {
        let diff = DiffEngine::diff(Some(&previous()), &current());
        let lines = Reporter::new().render(&diff, &current());
        assert_eq!(lines[0], r#"{"global":{"raw":50,"gzip":15}}"#);

        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["global"]["gzip"], 15);
    }

    #[test]
    fn test_global_line_keeps_sign_of_shrinking_bundle() {
        let line = global_line(&SizeDelta { raw: -50, gzip: -15 });
        assert_eq!(line, r#"{"global":{"raw":-50,"gzip":-15}}"#);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["global"]["raw"], -50);
    }

    #[test]
    fn test_render_lists_every_section_in_order() {
        let diff = DiffEngine::diff(Some(&previous()), &current());
        let lines = Reporter::new().render(&diff, &current());

        let headers: Vec<&str> = lines
            .iter()
            .filter(|l| l.ends_with(':') && !l.starts_with(' '))
            .map(String::as_str)
            .collect();
        assert_eq!(
            headers,
            vec![
                "Changed files:",
                "New files:",
                "Removed files:",
                "Page changes:",
                "New routes:",
                "Removed routes:"
            ]
        );
        assert!(lines.contains(&"  + b.js: raw 300 B, gzip 120 B".to_string()));
        assert!(lines.contains(&"  - a.js: raw 200 B, gzip 80 B".to_string()));
        assert!(lines.contains(&"  - /old (app/old/page.tsx)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("c.js")), "unchanged file must not be listed");
    }

    #[test]
    fn test_new_route_lists_global_files_with_current_sizes() {
        let diff = DiffEngine::diff(Some(&previous()), &current());
        let lines = Reporter::new().render(&diff, &current());

        let at = lines
            .iter()
            .position(|l| l == "  + /about (unresolved)")
            .expect("new route line");
        assert_eq!(lines[at + 1], "      global static/main.js: raw 150 B, gzip 55 B");
    }

    #[test]
    fn test_changed_detail_shows_before_after_and_delta() {
        let diff = DiffEngine::diff(Some(&previous()), &current());
        let lines = Reporter::new().render(&diff, &current());
        assert!(lines.contains(
            &"  ~ static/main.js: raw 100 B -> 150 B (+50 B), gzip 40 B -> 55 B (+15 B)".to_string()
        ));
    }

    #[test]
    fn test_empty_diff_renders_only_global_line() {
        let snapshot = current();
        let diff = DiffEngine::diff(Some(&snapshot), &snapshot);
        let lines = Reporter::new().render(&diff, &snapshot);
        assert_eq!(lines, vec![r#"{"global":{"raw":0,"gzip":0}}"#.to_string()]);
    }

    #[test]
    fn test_render_is_stable_across_calls() {
        let diff = DiffEngine::diff(Some(&previous()), &current());
        let reporter = Reporter::default();
        assert_eq!(reporter.render(&diff, &current()), reporter.render(&diff, &current()));
    }
}
