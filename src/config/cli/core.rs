//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ScoringConfig;
use crate::io::DEFAULT_DATA_PATH;

/// RSRC: training-efficiency leaderboard scoring
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rsrc")]
#[command(version)]
#[command(about = "Score and rank models by training efficiency, and sample GPU power draw")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score a leaderboard CSV and print the ranking
    Score(ScoreArgs),

    /// Sample GPU power draw
    Power(PowerArgs),

    /// Print the default scoring configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Path to the leaderboard CSV
    #[arg(value_name = "DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Scoring configuration YAML (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the reference year for age decay
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print only the first N ranked rows
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for the power command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PowerArgs {
    /// Seconds between polls
    #[arg(short, long, default_value_t = 1.0)]
    pub interval: f64,

    /// Total polling time in seconds
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Take a single reading and exit
    #[arg(long)]
    pub once: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ConfigArgs {
    /// Reference year written into the generated configuration
    #[arg(long)]
    pub current_year: Option<i32>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ScoringConfig
pub fn apply_overrides(config: ScoringConfig, args: &ScoreArgs) -> ScoringConfig {
    match args.current_year {
        Some(year) => config.with_current_year(year),
        None => config,
    }
}
