//! Config command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ConfigArgs, ScoringConfig};
use crate::error::Result;

pub fn run_config(args: ConfigArgs, level: LogLevel) -> Result<()> {
    print!("{}", render_config(&args)?);
    log(level, LogLevel::Verbose, "# Save with: rsrc config > scoring.yaml");
    Ok(())
}

pub(crate) fn render_config(args: &ConfigArgs) -> Result<String> {
    let config = match args.current_year {
        Some(year) => ScoringConfig::default().with_current_year(year),
        None => ScoringConfig::default(),
    };
    config.validate()?;
    config.to_yaml()
}
