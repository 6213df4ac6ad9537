//! Analyze command implementation
//!
//! Handles `bundle-delta analyze`: runs the [`AnalyzeWorkflow`] and prints
//! either the text change log or the JSON report. Stdout carries only the
//! report; banners and status lines go to stderr.

use anyhow::Result;
use console::style;
use std::env;

use super::workflow::{AnalyzeResult, AnalyzeWorkflow};
use crate::cli::AnalyzeArgs;
use crate::config::ConfigLoader;
use crate::fmt::{format_bytes, icon, CHECKMARK, MICROSCOPE, WARNING};
use crate::report::{JsonReport, Reporter};

/// Measure the current build and report changes since the previous run
///
/// # Examples
///
/// ```no_run
/// use bundle_delta::cli::AnalyzeArgs;
/// use bundle_delta::cmd::analyze::cmd_analyze;
///
/// cmd_analyze(&AnalyzeArgs::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the configuration is malformed, the build output
/// root or `build-manifest.json` is missing, or the snapshot cannot be saved.
pub fn cmd_analyze(args: &AnalyzeArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?.with_overrides(args.overrides());
    config.validate()?;

    if !args.json {
        eprintln!(
            "{}{} Bundle Size Analysis",
            icon(MICROSCOPE),
            style("bundle-delta").bold()
        );
        eprintln!("   Build output: {}", style(&config.build_dir).cyan());
        eprintln!();
    }

    let result = AnalyzeWorkflow::new(&project_root, config)
        .save(!args.no_save)
        .execute()?;

    if args.json {
        JsonReport::new(&result.diff, result.has_baseline).print();
        return Ok(());
    }

    Reporter::new().print(&result.diff, &result.current);
    print_footer(&result);
    Ok(())
}

fn print_footer(result: &AnalyzeResult) {
    eprintln!();
    if !result.has_baseline {
        eprintln!(
            "{}{}",
            icon(WARNING),
            style("No previous snapshot found; all files and routes reported as new").yellow()
        );
    }
    eprintln!(
        "   Global: raw {}, gzip {}",
        format_bytes(result.current.global.raw),
        format_bytes(result.current.global.gzip)
    );
    eprintln!(
        "   Measured {} file(s), {} cache hit(s)",
        result.cache_stats.measured, result.cache_stats.hits
    );
    if let Some(path) = &result.comment_written {
        eprintln!("   Comment appended to {}", path.display());
    }
    if result.saved {
        eprintln!("{}{}", icon(CHECKMARK), style("Snapshot saved").green());
    }
}
