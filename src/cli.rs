//! Command-line interface definition

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Script bundle size tracker
///
/// bundle-delta measures the raw and gzip size of every script a production
/// build emits, compares it with the previous run and reports what changed
/// per file, page and route.
#[derive(Parser, Debug)]
#[command(name = "bundle-delta", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure the current build and diff it against the previous run
    Analyze(AnalyzeArgs),

    /// Diff two saved snapshot files without measuring
    Compare {
        /// Previous snapshot (sizes.json or sizes.extended.json)
        previous: PathBuf,

        /// Current snapshot (sizes.json or sizes.extended.json)
        current: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags of `bundle-delta analyze`
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Build output root containing the manifests [default: .next]
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<String>,

    /// Application source directory for route resolution [default: app]
    #[arg(long, value_name = "DIR")]
    pub app_dir: Option<String>,

    /// Directory holding saved snapshots [default: .bundle-delta]
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<String>,

    /// Append a markdown summary to this file
    #[arg(long, value_name = "FILE")]
    pub comment_file: Option<String>,

    /// Output as JSON (for CI/CD integration)
    #[arg(long)]
    pub json: bool,

    /// Do not replace the saved snapshot with the current one
    #[arg(long)]
    pub no_save: bool,
}

impl AnalyzeArgs {
    /// Path flags as configuration overrides
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            build_dir: self.build_dir.clone(),
            app_dir: self.app_dir.clone(),
            history_dir: self.history_dir.clone(),
            comment_file: self.comment_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_analyze_flags_become_overrides() {
        let cli = Cli::parse_from([
            "bundle-delta",
            "analyze",
            "--build-dir",
            "out",
            "--comment-file",
            "c.md",
            "--no-save",
        ]);
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.no_save);
        let overrides = args.overrides();
        assert_eq!(overrides.build_dir.as_deref(), Some("out"));
        assert_eq!(overrides.comment_file.as_deref(), Some("c.md"));
        assert!(overrides.history_dir.is_none());
    }

    #[test]
    fn test_no_emoji_is_global() {
        let cli = Cli::parse_from(["bundle-delta", "compare", "a.json", "b.json", "--no-emoji"]);
        assert!(cli.no_emoji);
    }
}
