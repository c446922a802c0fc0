//! CLI command implementations

mod config;
mod power;
mod score;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::error::Result;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Score(args) => score::run_score(args, log_level),
        Command::Power(args) => power::run_power(args, log_level),
        Command::Config(args) => config::run_config(args, log_level),
    }
}
