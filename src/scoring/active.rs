//! Active-parameter estimation.
//!
//! Dense models use all parameters. MoE models default to a fixed fraction,
//! and models with a published active count take it from an override table
//! keyed by exact model name.

use super::record::ModelTable;
use crate::config::ScoringConfig;
use std::collections::{BTreeMap, HashMap};

/// Exact-name lookup of known active parameter counts (billions)
pub trait ActiveOverrides {
    /// Active parameter count for `model`, if known
    fn active_parameters(&self, model: &str) -> Option<f64>;
}

impl ActiveOverrides for BTreeMap<String, f64> {
    fn active_parameters(&self, model: &str) -> Option<f64> {
        self.get(model).copied()
    }
}

impl ActiveOverrides for HashMap<String, f64> {
    fn active_parameters(&self, model: &str) -> Option<f64> {
        self.get(model).copied()
    }
}

impl<'a> ActiveOverrides for [(&'a str, f64)] {
    fn active_parameters(&self, model: &str) -> Option<f64> {
        self.iter().find(|(name, _)| *name == model).map(|(_, active)| *active)
    }
}

/// Override table that matches nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl ActiveOverrides for NoOverrides {
    fn active_parameters(&self, _model: &str) -> Option<f64> {
        None
    }
}

/// Set `active_parameters` for every row
///
/// An override wins over the architecture rule. A value above the total
/// parameter count is clamped to it.
pub fn scale_active_parameters<O>(table: &mut ModelTable, config: &ScoringConfig, overrides: &O)
where
    O: ActiveOverrides + ?Sized,
{
    for row in table.rows_mut() {
        let estimate = match overrides.active_parameters(&row.name) {
            Some(active) => active,
            None => row.parameters_b * config.arch_params(row.architecture).active_param_scale,
        };
        let active = if estimate > row.parameters_b {
            tracing::warn!(
                model = %row.name,
                active = estimate,
                total = row.parameters_b,
                "active parameters exceed total, clamping"
            );
            row.parameters_b
        } else {
            estimate
        };
        row.active_parameters = Some(active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Architecture, ModelRecord};

    fn table() -> ModelTable {
        ModelTable::new(vec![
            ModelRecord::new("dense", Architecture::Dense, 2024, 70.0, Some(1.0), 1.0),
            ModelRecord::new("moe", Architecture::MoE, 2024, 50.0, Some(1.0), 1.0),
            ModelRecord::new("Mixtral 8x7B", Architecture::MoE, 2023, 46.7, Some(1.0), 1.0),
        ])
    }

    #[test]
    fn test_architecture_rule() {
        let mut t = table();
        scale_active_parameters(&mut t, &ScoringConfig::default(), &NoOverrides);
        assert_eq!(t.get("dense").unwrap().active_parameters, Some(70.0));
        assert!((t.get("moe").unwrap().active_parameters.unwrap() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_overrides_apply() {
        let config = ScoringConfig::default();
        let mut t = table();
        scale_active_parameters(&mut t, &config, &config.active_overrides);
        assert_eq!(t.get("Mixtral 8x7B").unwrap().active_parameters, Some(13.0));
    }

    #[test]
    fn test_override_is_exact_match() {
        let overrides: &[(&str, f64)] = &[("MOE", 5.0), ("moe ", 6.0)];
        let mut t = table();
        scale_active_parameters(&mut t, &ScoringConfig::default(), overrides);
        assert!((t.get("moe").unwrap().active_parameters.unwrap() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_override_beats_architecture_on_dense() {
        let mut overrides = HashMap::new();
        overrides.insert("dense".to_string(), 12.5);
        let mut t = table();
        scale_active_parameters(&mut t, &ScoringConfig::default(), &overrides);
        assert_eq!(t.get("dense").unwrap().active_parameters, Some(12.5));
    }

    #[test]
    fn test_override_above_total_is_clamped() {
        let overrides: &[(&str, f64)] = &[("moe", 500.0)];
        let mut t = table();
        scale_active_parameters(&mut t, &ScoringConfig::default(), overrides);
        assert_eq!(t.get("moe").unwrap().active_parameters, Some(50.0));
    }

    #[test]
    fn test_active_never_exceeds_total() {
        let config = ScoringConfig::default();
        let mut t = table();
        scale_active_parameters(&mut t, &config, &config.active_overrides);
        for row in t.rows() {
            assert!(row.active_parameters.unwrap() <= row.parameters_b);
        }
    }
}
