//! Command handlers for bundle-delta CLI
//!
//! Each submodule handles a specific CLI command; the analyze pipeline itself
//! lives in [`workflow`] so it can run without any console output.

pub mod analyze;
pub mod compare;
pub mod completions;
pub mod workflow;

pub use analyze::cmd_analyze;
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use workflow::{AnalyzeResult, AnalyzeWorkflow};
