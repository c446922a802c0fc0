//! Scoring configuration
//!
//! Every constant the RSRC pipeline uses lives in [`ScoringConfig`]. The value
//! is immutable once handed to a pipeline, so a run is fully reproducible from
//! its input table and its configuration. Defaults match the published metric.
//!
//! # YAML
//!
//! ```yaml
//! alpha: 0.5
//! beta: 50.0
//! current_year: 2024
//! active_overrides:
//!   GPT-4o: 200.0
//!   DeepSeek V3: 37.0
//!   Mixtral 8x7B: 13.0
//! unknown_architecture: dense
//! ```
//!
//! Fields left out of the file take their default.

use crate::error::{Error, Result};
use crate::scoring::Architecture;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What to do with architecture labels other than `Dense` and `MoE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownArchitecture {
    /// Score the row with the dense rules and log a warning
    #[default]
    Dense,
    /// Abort the run
    Reject,
}

/// Architecture-dependent scoring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchParams {
    /// Fraction of total parameters counted as active
    pub active_param_scale: f64,
    /// Exponent applied to the efficiency score in the final score
    pub score_exponent: f64,
    /// Multiplier for rows released before `legacy_cutoff_year`
    pub legacy_penalty_factor: f64,
}

/// Constants of the RSRC metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Sub-linear parameter scaling of training FLOPs
    pub alpha: f64,
    /// Energy normalization divisor
    pub beta: f64,
    /// Architecture score multiplier in the final score
    pub arch_score: f64,
    /// Active fraction assumed for MoE models without an override
    pub moe_param_scale: f64,
    /// Efficiency-score multiplier for legacy dense models
    pub legacy_penalty_factor: f64,
    /// Dense models released before this year get the legacy penalty
    pub legacy_cutoff_year: i32,
    /// Efficiency-score exponent for MoE rows
    pub moe_exponent: f64,
    /// Efficiency-score exponent for dense rows
    pub dense_exponent: f64,
    /// Reference year for age decay
    pub current_year: i32,
    /// Decay per year of age
    pub age_decay_rate: f64,
    /// Lower bound of the age decay
    pub age_decay_floor: f64,
    /// Exponent of the training-FLOPs cap (`parameters_b^e * scale`)
    pub flops_cap_exponent: f64,
    /// Scale of the training-FLOPs cap
    pub flops_cap_scale: f64,
    /// Exact model name to active parameter count (billions)
    pub active_overrides: BTreeMap<String, f64>,
    /// Handling of architecture labels outside {Dense, MoE}
    pub unknown_architecture: UnknownArchitecture,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 50.0,
            arch_score: 1.0,
            moe_param_scale: 0.8,
            legacy_penalty_factor: 1.2,
            legacy_cutoff_year: 2024,
            moe_exponent: 0.48,
            dense_exponent: 0.45,
            current_year: 2024,
            age_decay_rate: 0.05,
            age_decay_floor: 0.8,
            flops_cap_exponent: 0.8,
            flops_cap_scale: 1e3,
            active_overrides: default_active_overrides(),
            unknown_architecture: UnknownArchitecture::Dense,
        }
    }
}

/// Known active parameter counts for MoE models, in billions
pub fn default_active_overrides() -> BTreeMap<String, f64> {
    [("GPT-4o", 200.0), ("DeepSeek V3", 37.0), ("Mixtral 8x7B", 13.0)]
        .into_iter()
        .map(|(name, active)| (name.to_string(), active))
        .collect()
}

impl ScoringConfig {
    /// Set the reference year for age decay
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Replace the active-parameter override table
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.active_overrides = overrides.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    /// Set the unknown-architecture policy
    pub fn with_unknown_architecture(mut self, policy: UnknownArchitecture) -> Self {
        self.unknown_architecture = policy;
        self
    }

    /// Scoring parameters for an architecture
    pub fn arch_params(&self, architecture: Architecture) -> ArchParams {
        match architecture {
            Architecture::MoE => ArchParams {
                active_param_scale: self.moe_param_scale,
                score_exponent: self.moe_exponent,
                legacy_penalty_factor: 1.0,
            },
            Architecture::Dense => ArchParams {
                active_param_scale: 1.0,
                score_exponent: self.dense_exponent,
                legacy_penalty_factor: self.legacy_penalty_factor,
            },
        }
    }

    /// Upper bound for stored training FLOPs of a model
    pub fn flops_cap(&self, parameters_b: f64) -> f64 {
        parameters_b.powf(self.flops_cap_exponent) * self.flops_cap_scale
    }

    /// Check that the configuration can produce meaningful scores
    pub fn validate(&self) -> Result<()> {
        if self.beta == 0.0 || !self.beta.is_finite() {
            return Err(value_error("beta", self.beta, "must be finite and non-zero", "Use the default of 50"));
        }
        if !(self.age_decay_floor > 0.0 && self.age_decay_floor <= 1.0) {
            return Err(value_error(
                "age_decay_floor",
                self.age_decay_floor,
                "must be in (0, 1]",
                "Use the default of 0.8",
            ));
        }
        if !(self.age_decay_rate >= 0.0 && self.age_decay_rate.is_finite()) {
            return Err(value_error(
                "age_decay_rate",
                self.age_decay_rate,
                "must not be negative",
                "Use the default of 0.05",
            ));
        }
        for (field, value) in [
            ("alpha", self.alpha),
            ("moe_exponent", self.moe_exponent),
            ("dense_exponent", self.dense_exponent),
            ("flops_cap_exponent", self.flops_cap_exponent),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(value_error(field, value, "must be a non-negative number", "Check the exponent"));
            }
        }
        for (field, value) in [
            ("legacy_penalty_factor", self.legacy_penalty_factor),
            ("arch_score", self.arch_score),
            ("flops_cap_scale", self.flops_cap_scale),
        ] {
            if !value.is_finite() {
                return Err(value_error(field, value, "must be a finite number", "Use the default value"));
            }
        }
        if !(self.moe_param_scale > 0.0 && self.moe_param_scale <= 1.0) {
            return Err(value_error(
                "moe_param_scale",
                self.moe_param_scale,
                "must be in (0, 1]",
                "Use the default of 0.8",
            ));
        }
        if let Some((name, active)) = self.active_overrides.iter().find(|(_, v)| **v <= 0.0) {
            return Err(Error::ConfigValue {
                field: format!("active_overrides.{name}"),
                message: format!("{active} is not a positive parameter count"),
                suggestion: "Give the active parameter count in billions".to_string(),
            });
        }
        Ok(())
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization { message: e.to_string() })
    }
}

fn value_error(field: &str, value: f64, message: &str, suggestion: &str) -> Error {
    Error::ConfigValue {
        field: field.to_string(),
        message: format!("{value} {message}"),
        suggestion: suggestion.to_string(),
    }
}

/// Parse and validate a scoring configuration from YAML text
pub fn parse_config(yaml: &str, origin: &Path) -> Result<ScoringConfig> {
    let config: ScoringConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigParsing { path: origin.to_path_buf(), message: e.to_string() })?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a scoring configuration file
pub fn load_config(path: &Path) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::ConfigNotFound { path: path.to_path_buf() },
        _ => Error::io(format!("reading {}", path.display()), e),
    })?;
    parse_config(&content, path)
}
