use bundle_delta::cli::{Cli, Commands};
use bundle_delta::cmd;
use bundle_delta::fmt::NO_EMOJI_ENV;
use clap::{CommandFactory, Parser};
use std::process;

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var(NO_EMOJI_ENV, "1");
    }

    let result = match &cli.command {
        Some(Commands::Analyze(args)) => cmd::cmd_analyze(args),
        Some(Commands::Compare {
            previous,
            current,
            json,
        }) => cmd::cmd_compare(previous, current, *json),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => Cli::command().print_help().map_err(anyhow::Error::from),
    };

    if let Err(e) = result {
        use bundle_delta::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
