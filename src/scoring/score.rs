//! Final RSRC score.

use super::record::{ModelRecord, ModelTable};
use crate::config::ScoringConfig;
use crate::error::{Error, Result};

const STAGE: &str = "final score";

/// `ln(active) * arch_score / efficiency^exponent * age_decay`
///
/// Non-positive or NaN inputs give a non-finite result; callers decide
/// whether that row is worth ranking.
pub fn rsrc_score(active_parameters: f64, efficiency: f64, age_decay: f64, exponent: f64, arch_score: f64) -> f64 {
    (active_parameters.ln() * arch_score) / efficiency.powf(exponent) * age_decay
}

fn require(row: &ModelRecord, column: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| Error::MissingColumn { column, model: row.name.clone(), stage: STAGE })
}

/// Set `final_score` for every row
///
/// Needs `active_parameters`, `flops_efficiency_score` and `age_decay`.
pub fn compute_final_scores(table: &mut ModelTable, config: &ScoringConfig) -> Result<()> {
    for row in table.rows_mut() {
        let active = require(row, "active_parameters", row.active_parameters)?;
        let efficiency = require(row, "flops_efficiency_score", row.flops_efficiency_score)?;
        let decay = require(row, "age_decay", row.age_decay)?;
        let exponent = config.arch_params(row.architecture).score_exponent;

        let score = rsrc_score(active, efficiency, decay, exponent, config.arch_score);
        if !score.is_finite() {
            tracing::warn!(
                model = %row.name,
                active_parameters = active,
                efficiency,
                "score is not a finite number, row will rank last"
            );
        }
        row.final_score = Some(score);
    }
    Ok(())
}
