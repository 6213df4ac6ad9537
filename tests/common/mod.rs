//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Fixture creation for fake production builds
//! - Snapshot file assertions
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::BuildFixture;
//!
//! let build = BuildFixture::new().unwrap();
//! build.write_chunk("static/chunks/main.js", "console.log(1)").unwrap();
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// Get the bundle-delta binary command with emoji disabled
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-delta"));
    cmd.env("NO_EMOJI", "1").env_remove("RUST_LOG");
    cmd
}
