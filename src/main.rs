//! rsrc CLI
//!
//! # Usage
//!
//! ```bash
//! # Score the default leaderboard
//! rsrc score
//!
//! # Score another file as JSON, top 5 only
//! rsrc score board.csv --format json --top 5
//!
//! # Score with custom constants
//! rsrc config > scoring.yaml
//! rsrc score --config scoring.yaml --current-year 2025
//!
//! # Sample GPU power for 30 seconds
//! rsrc power --interval 0.5 --duration 30
//! ```

use clap::Parser;
use rsrc::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
