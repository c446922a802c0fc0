//! Score command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, OutputFormat, ScoreArgs, ScoringConfig};
use crate::error::Result;
use crate::io::load_leaderboard;
use crate::scoring::{Leaderboard, ScoringPipeline};

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            log(level, LogLevel::Verbose, &format!("Loading configuration: {}", path.display()));
            load_config(path)?
        }
        None => ScoringConfig::default(),
    };
    let config = apply_overrides(config, &args);
    config.validate()?;

    log(level, LogLevel::Verbose, &format!("Loading leaderboard: {}", args.data.display()));
    let raw = load_leaderboard(&args.data)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  {} models, reference year {}", raw.len(), config.current_year),
    );

    let board = ScoringPipeline::new(config).run(&raw)?;
    print!("{}", render(&board, args.format, args.top)?);

    let skipped = board.non_comparable().count();
    if skipped > 0 {
        tracing::info!(models = skipped, "models without a comparable score ranked last");
    }
    Ok(())
}

pub(crate) fn render(board: &Leaderboard, format: OutputFormat, top: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(board.render_text(top)),
        OutputFormat::Json => Ok(format!("{}\n", board.to_json(top)?)),
    }
}
