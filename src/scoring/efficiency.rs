//! FLOPs efficiency score, legacy penalty and FLOPs cap.
//!
//! The cap runs after the score and only rewrites the stored
//! `training_flops`; the score keeps the uncapped value.

use super::record::{Architecture, ModelTable};
use crate::config::ScoringConfig;
use crate::error::{Error, Result};

/// `(training_flops / parameters_b^alpha) * (energy_per_pflop / beta)`
pub fn efficiency_score(training_flops: f64, parameters_b: f64, energy_per_pflop: f64, config: &ScoringConfig) -> f64 {
    (training_flops / parameters_b.powf(config.alpha)) * (energy_per_pflop / config.beta)
}

/// Compute `flops_efficiency_score` for every row
///
/// Rows with unknown FLOPs get NaN.
pub fn compute_efficiency_scores(table: &mut ModelTable, config: &ScoringConfig) {
    for row in table.rows_mut() {
        let flops = row.training_flops.unwrap_or(f64::NAN);
        row.flops_efficiency_score =
            Some(efficiency_score(flops, row.parameters_b, row.energy_per_pflop, config));
    }
}

/// Whether a row gets the legacy dense penalty
pub fn is_legacy(architecture: Architecture, year: i32, config: &ScoringConfig) -> bool {
    architecture == Architecture::Dense && year < config.legacy_cutoff_year
}

/// Multiply the efficiency score of legacy dense rows by the penalty factor
pub fn apply_legacy_penalty(table: &mut ModelTable, config: &ScoringConfig) -> Result<()> {
    for row in table.rows_mut() {
        let score = row.flops_efficiency_score.as_mut().ok_or_else(|| Error::MissingColumn {
            column: "flops_efficiency_score",
            model: row.name.clone(),
            stage: "legacy penalty",
        })?;
        if is_legacy(row.architecture, row.year, config) {
            *score *= config.arch_params(row.architecture).legacy_penalty_factor;
        }
    }
    Ok(())
}

/// Clamp stored training FLOPs to `parameters_b^0.8 * 1000`
///
/// Unknown FLOPs stay unknown.
pub fn apply_flops_cap(table: &mut ModelTable, config: &ScoringConfig) {
    for row in table.rows_mut() {
        if let Some(flops) = row.training_flops.as_mut() {
            let cap = config.flops_cap(row.parameters_b);
            if *flops > cap {
                tracing::debug!(model = %row.name, flops = *flops, cap, "capping training FLOPs");
                *flops = cap;
            }
        }
    }
}
