//! Age decay: a flat penalty per year of age, floored.

use super::record::ModelTable;
use crate::config::ScoringConfig;

/// `1 - (current_year - year) * rate`, clamped to `[floor, 1.0]`
///
/// Models dated after `current_year` get 1.0. The result never exceeds 1.0,
/// even when the floor does.
pub fn age_decay(year: i32, config: &ScoringConfig) -> f64 {
    let age = f64::from(config.current_year) - f64::from(year);
    // max/min rather than clamp: an unvalidated floor above 1.0 or NaN must not panic
    (1.0 - age * config.age_decay_rate).max(config.age_decay_floor).min(1.0)
}

/// Set `age_decay` for every row
pub fn apply_age_decay(table: &mut ModelTable, config: &ScoringConfig) {
    for row in table.rows_mut() {
        row.age_decay = Some(age_decay(row.year, config));
    }
}
