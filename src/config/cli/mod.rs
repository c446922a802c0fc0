//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! rsrc score
//! rsrc score data/model_leaderboard.csv --config scoring.yaml --top 5
//! rsrc score leaderboard.csv --format json
//! rsrc power --interval 0.5 --duration 30
//! rsrc config > scoring.yaml
//! ```

mod core;
mod types;

pub use core::{apply_overrides, parse_args, Cli, Command, ConfigArgs, PowerArgs, ScoreArgs};
pub use types::OutputFormat;


#[cfg(test)]
mod property_tests;
