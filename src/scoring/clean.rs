//! Data cleaning: raw CSV rows to a typed [`ModelTable`].
//!
//! - MMLU: `~` and `%` are stripped, `N/A` becomes missing, the rest is
//!   parsed. Missing scores are then filled with the mean of the scores that
//!   parsed.
//! - Training FLOPs: `N/A` becomes missing and stays missing.

use super::record::{Architecture, ModelRecord, ModelTable, RawModelRecord};
use crate::config::{ScoringConfig, UnknownArchitecture};
use crate::error::{Error, Result};
use std::collections::HashMap;

const NOT_AVAILABLE: &str = "N/A";

fn is_missing_marker(value: &str) -> bool {
    value.is_empty() || value == NOT_AVAILABLE || value.eq_ignore_ascii_case("nan")
}

/// Normalize a textual MMLU score
///
/// Returns `None` for `N/A`, empty cells, unparseable text and values
/// outside [0, 100].
pub fn normalize_mmlu(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| *c != '~' && *c != '%').collect();
    let stripped = stripped.trim();
    if is_missing_marker(stripped) {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|v| (0.0..=100.0).contains(v))
}

/// Parse a training-FLOPs cell; `N/A` and empty cells are missing
pub fn parse_training_flops(raw: &str, model: &str) -> Result<Option<f64>> {
    let value = raw.trim();
    if is_missing_marker(value) {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| Error::InvalidField {
        column: "Training FLOPs",
        model: model.to_string(),
        value: raw.to_string(),
    })
}

/// Mean of the present MMLU scores, `None` if there are none
pub fn mmlu_mean(rows: &[ModelRecord]) -> Option<f64> {
    let (sum, count) = rows
        .iter()
        .filter_map(|r| r.mmlu_score)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Fill missing MMLU scores with the mean of the parsed ones
///
/// The mean is computed once, before any row is filled, so imputed values
/// never feed back into it. Returns the mean used.
pub fn impute_mmlu(rows: &mut [ModelRecord]) -> Option<f64> {
    let mean = mmlu_mean(rows)?;
    for row in rows.iter_mut().filter(|r| r.mmlu_score.is_none()) {
        row.mmlu_score = Some(mean);
        row.mmlu_imputed = true;
    }
    Some(mean)
}

fn resolve_architecture(raw: &RawModelRecord, policy: UnknownArchitecture) -> Result<Architecture> {
    if let Some(arch) = Architecture::from_label(&raw.architecture) {
        return Ok(arch);
    }
    match policy {
        UnknownArchitecture::Dense => {
            tracing::warn!(
                model = %raw.name,
                label = %raw.architecture,
                "unknown architecture, scoring with dense rules"
            );
            Ok(Architecture::Dense)
        }
        UnknownArchitecture::Reject => Err(Error::UnknownArchitecture {
            model: raw.name.clone(),
            label: raw.architecture.clone(),
        }),
    }
}

fn clean_row(raw: &RawModelRecord, config: &ScoringConfig) -> Result<ModelRecord> {
    let architecture = resolve_architecture(raw, config.unknown_architecture)?;
    let training_flops = parse_training_flops(&raw.training_flops, &raw.name)?;
    if training_flops.is_none() {
        tracing::warn!(model = %raw.name, "training FLOPs unknown, score will not be comparable");
    }
    if raw.parameters_b.is_nan() || raw.parameters_b <= 0.0 {
        tracing::warn!(
            model = %raw.name,
            parameters_b = raw.parameters_b,
            "non-positive parameter count, score will not be comparable"
        );
    }

    let mmlu_score = normalize_mmlu(&raw.mmlu);
    if mmlu_score.is_none() && !is_missing_marker(raw.mmlu.trim()) {
        tracing::warn!(model = %raw.name, value = %raw.mmlu, "unusable MMLU score treated as missing");
    }

    let mut record = ModelRecord::new(
        raw.name.clone(),
        architecture,
        raw.year,
        raw.parameters_b,
        training_flops,
        raw.energy_per_pflop,
    );
    record.architecture_label = raw.architecture.clone();
    record.mmlu_score = mmlu_score;
    Ok(record)
}

/// Clean raw rows into a table
///
/// Fails on duplicate model names, unparseable FLOPs and, under the reject
/// policy, unknown architectures.
pub fn clean(raw: &[RawModelRecord], config: &ScoringConfig) -> Result<ModelTable> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(raw.len());
    for (idx, row) in raw.iter().enumerate() {
        if let Some(first) = seen.insert(row.name.as_str(), idx) {
            return Err(Error::DuplicateModel { name: row.name.clone(), first, second: idx });
        }
    }

    let mut rows = raw.iter().map(|r| clean_row(r, config)).collect::<Result<Vec<_>>>()?;

    match impute_mmlu(&mut rows) {
        Some(mean) => tracing::debug!(mean, "imputed missing MMLU scores"),
        None if !rows.is_empty() => tracing::warn!("no usable MMLU scores, column left missing"),
        None => {}
    }

    Ok(ModelTable::new(rows))
}
