//! Configuration: scoring parameters loaded from YAML, and CLI arguments.

mod cli;
mod scoring;

pub use cli::{apply_overrides, parse_args, Cli, Command, ConfigArgs, OutputFormat, PowerArgs, ScoreArgs};
pub use scoring::{
    default_active_overrides, load_config, parse_config, ArchParams, ScoringConfig, UnknownArchitecture,
};
