//! Stage ordering for a scoring run.

use super::active::{scale_active_parameters, ActiveOverrides};
use super::clean::clean;
use super::decay::apply_age_decay;
use super::efficiency::{apply_flops_cap, apply_legacy_penalty, compute_efficiency_scores};
use super::rank::Leaderboard;
use super::record::{ModelTable, RawModelRecord};
use super::score::compute_final_scores;
use crate::config::ScoringConfig;
use crate::error::Result;
use std::fmt;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    EfficiencyScore,
    LegacyPenalty,
    FlopsCap,
    ActiveParameters,
    AgeDecay,
    FinalScore,
}

impl Stage {
    /// All stages after cleaning, in the order they must run
    pub const ORDER: [Stage; 6] = [
        Stage::EfficiencyScore,
        Stage::LegacyPenalty,
        Stage::FlopsCap,
        Stage::ActiveParameters,
        Stage::AgeDecay,
        Stage::FinalScore,
    ];

    /// Human-readable stage name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::EfficiencyScore => "efficiency score",
            Stage::LegacyPenalty => "legacy penalty",
            Stage::FlopsCap => "FLOPs cap",
            Stage::ActiveParameters => "active parameters",
            Stage::AgeDecay => "age decay",
            Stage::FinalScore => "final score",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RSRC scoring pipeline bound to one configuration
///
/// # Example
///
/// ```
/// use rsrc::config::ScoringConfig;
/// use rsrc::scoring::{Architecture, ModelRecord, ModelTable, ScoringPipeline};
///
/// let pipeline = ScoringPipeline::new(ScoringConfig::default());
/// let table = ModelTable::new(vec![
///     ModelRecord::new("dense-70b", Architecture::Dense, 2023, 70.0, Some(1000.0), 40.0),
/// ]);
/// let scored = pipeline.score(table).unwrap();
/// assert!(scored.rows()[0].is_comparable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringPipeline {
    config: ScoringConfig,
}

impl ScoringPipeline {
    /// Create a pipeline
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Clean raw rows into a table
    pub fn clean(&self, raw: &[RawModelRecord]) -> Result<ModelTable> {
        clean(raw, &self.config)
    }

    /// Run every stage with the configured override table
    pub fn score(&self, table: ModelTable) -> Result<ModelTable> {
        self.score_with_overrides(table, &self.config.active_overrides)
    }

    /// Run every stage with a caller-supplied override table
    pub fn score_with_overrides<O>(&self, mut table: ModelTable, overrides: &O) -> Result<ModelTable>
    where
        O: ActiveOverrides + ?Sized,
    {
        for stage in Stage::ORDER {
            tracing::debug!(%stage, rows = table.len(), "running stage");
            self.run_stage(stage, &mut table, overrides)?;
        }
        Ok(table)
    }

    fn run_stage<O>(&self, stage: Stage, table: &mut ModelTable, overrides: &O) -> Result<()>
    where
        O: ActiveOverrides + ?Sized,
    {
        let config = &self.config;
        match stage {
            Stage::EfficiencyScore => compute_efficiency_scores(table, config),
            Stage::LegacyPenalty => apply_legacy_penalty(table, config)?,
            Stage::FlopsCap => apply_flops_cap(table, config),
            Stage::ActiveParameters => scale_active_parameters(table, config, overrides),
            Stage::AgeDecay => apply_age_decay(table, config),
            Stage::FinalScore => compute_final_scores(table, config)?,
        }
        Ok(())
    }

    /// Clean, score and rank raw rows
    pub fn run(&self, raw: &[RawModelRecord]) -> Result<Leaderboard> {
        let table = self.score(self.clean(raw)?)?;
        Ok(Leaderboard::from_table(&table))
    }
}
