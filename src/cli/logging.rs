//! Logging utilities for CLI output
//!
//! Report output goes to stdout through [`log`]. Diagnostics go through
//! `tracing` to stderr, so `--format json` output stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the global `--quiet`/`--verbose` flags
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "rsrc=error",
            LogLevel::Normal => "rsrc=info",
            LogLevel::Verbose => "rsrc=debug",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Install the stderr diagnostics subscriber
///
/// `RUST_LOG` overrides the level's default filter. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(level: LogLevel) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok()
}
