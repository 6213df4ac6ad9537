//! Completions command implementation
//!
//! Handles the `bundle-delta completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-delta completions bash > /etc/bash_completion.d/bundle-delta
///
/// # Zsh
/// bundle-delta completions zsh > ~/.zfunc/_bundle-delta
///
/// # Fish
/// bundle-delta completions fish > ~/.config/fish/completions/bundle-delta.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "bundle-delta", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_mention_every_subcommand() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut buf = Vec::new();
            write_completions(shell, &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("analyze"), "{:?} lacks analyze", shell);
            assert!(script.contains("compare"), "{:?} lacks compare", shell);
        }
    }
}
