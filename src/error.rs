//! Error types with contextual suggestions
//!
//! Only fatal conditions are represented here. Optional inputs (page and
//! route manifests, the previous snapshot, the comment file) degrade to
//! empty defaults at the point where they are loaded and never reach this
//! type.
//!
//! # Examples
//!
//! ```
//! use bundle_delta::error::BundleDeltaError;
//! use std::path::PathBuf;
//!
//! let err = BundleDeltaError::BuildDirNotFound {
//!     path: PathBuf::from(".next"),
//! };
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().is_some());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Fatal bundle-delta errors
#[derive(Error, Debug)]
pub enum BundleDeltaError {
    /// Build output root does not exist or is not a directory
    #[error("Build output directory not found: {}", path.display())]
    BuildDirNotFound {
        /// Configured build output root
        path: PathBuf,
    },

    /// A required manifest is missing
    #[error("Required manifest not found: {}", path.display())]
    ManifestNotFound {
        /// Path of the missing manifest
        path: PathBuf,
    },

    /// A required manifest exists but cannot be parsed
    #[error("Invalid manifest {}: {reason}", path.display())]
    ManifestInvalid {
        /// Path of the malformed manifest
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A snapshot file named explicitly on the command line is unusable
    #[error("Cannot read snapshot {}", path.display())]
    SnapshotUnreadable {
        /// Path of the snapshot file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// A snapshot file named explicitly on the command line is not a snapshot
    #[error("Invalid snapshot {}: {reason}", path.display())]
    SnapshotInvalid {
        /// Path of the snapshot file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Configuration file is malformed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BundleDeltaError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::BuildDirNotFound { path } => Some(format!(
                "Run your production build first, or point --build-dir at the directory it wrote ({} was not found)",
                path.display()
            )),
            Self::ManifestNotFound { .. } => Some(
                "The build output looks incomplete; re-run the production build".to_string(),
            ),
            Self::ManifestInvalid { .. } => Some(
                "The manifest must be JSON with a \"rootMainFiles\" array".to_string(),
            ),
            Self::SnapshotUnreadable { path, .. } => Some(format!(
                "Ensure {} exists and was written by 'bundle-delta analyze'",
                path.display()
            )),
            Self::SnapshotInvalid { .. } => Some(
                "Pass a sizes.json or sizes.extended.json written by 'bundle-delta analyze'"
                    .to_string(),
            ),
            Self::Config(_) => Some("Check .bundle-delta.toml for typos".to_string()),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BuildDirNotFound { .. } => 66,   // EX_NOINPUT
            Self::ManifestNotFound { .. } => 66,   // EX_NOINPUT
            Self::ManifestInvalid { .. } => 65,    // EX_DATAERR
            Self::SnapshotUnreadable { .. } => 66, // EX_NOINPUT
            Self::SnapshotInvalid { .. } => 65,    // EX_DATAERR
            Self::Config(_) => 78,                 // EX_CONFIG
            Self::Io { .. } => 74,                 // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bd_error) = error.downcast_ref::<BundleDeltaError>() {
            if let Some(suggestion) = bd_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(bd_error) = error.downcast_ref::<BundleDeltaError>() {
            bd_error.exit_code()
        } else {
            1
        }
    }
}
