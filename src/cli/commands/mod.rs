//! CLI command implementations

mod analyze;
mod checkpoint;
mod splits;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Analyze(args) => analyze::run_analyze(args, log_level),
        Command::Splits(args) => splits::run_splits(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Checkpoint(args) => checkpoint::run_checkpoint(args, log_level),
    }
}
