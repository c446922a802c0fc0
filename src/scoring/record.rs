//! Leaderboard rows and the table the pipeline stages transform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model architecture family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    /// All parameters active for every token
    Dense,
    /// Mixture of Experts: a subset of parameters active per token
    MoE,
}

impl Architecture {
    /// Parse an exact architecture label (`"Dense"` or `"MoE"`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Dense" => Some(Self::Dense),
            "MoE" => Some(Self::MoE),
            _ => None,
        }
    }

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dense => "Dense",
            Self::MoE => "MoE",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One leaderboard row as read from the CSV, before cleaning
///
/// `Training FLOPs` and `MMLU (5-shot)` stay textual because the source
/// data mixes numbers with forms like `N/A` and `~78%`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawModelRecord {
    #[serde(rename = "Model")]
    pub name: String,
    #[serde(rename = "Architecture")]
    pub architecture: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Parameters (B)")]
    pub parameters_b: f64,
    #[serde(rename = "Training FLOPs")]
    pub training_flops: String,
    #[serde(rename = "Energy/pFLOP")]
    pub energy_per_pflop: f64,
    #[serde(rename = "MMLU (5-shot)")]
    pub mmlu: String,
}

/// A cleaned model row
///
/// Derived columns are `None` until the stage producing them has run. Once
/// set they hold an `f64`, which is NaN when the inputs were missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    pub name: String,
    pub architecture: Architecture,
    /// Architecture label as it appeared in the input
    pub architecture_label: String,
    pub year: i32,
    pub parameters_b: f64,
    /// `None` when unknown; never imputed
    pub training_flops: Option<f64>,
    pub energy_per_pflop: f64,
    /// Percentage in [0, 100]; `None` only when no row had a usable score
    pub mmlu_score: Option<f64>,
    /// Whether `mmlu_score` was filled with the column mean
    pub mmlu_imputed: bool,
    pub flops_efficiency_score: Option<f64>,
    pub active_parameters: Option<f64>,
    pub age_decay: Option<f64>,
    pub final_score: Option<f64>,
}

impl ModelRecord {
    /// Create a cleaned row with no derived columns
    pub fn new(
        name: impl Into<String>,
        architecture: Architecture,
        year: i32,
        parameters_b: f64,
        training_flops: Option<f64>,
        energy_per_pflop: f64,
    ) -> Self {
        Self {
            name: name.into(),
            architecture,
            architecture_label: architecture.label().to_string(),
            year,
            parameters_b,
            training_flops,
            energy_per_pflop,
            mmlu_score: None,
            mmlu_imputed: false,
            flops_efficiency_score: None,
            active_parameters: None,
            age_decay: None,
            final_score: None,
        }
    }

    /// Set the MMLU score
    pub fn with_mmlu(mut self, score: f64) -> Self {
        self.mmlu_score = Some(score);
        self
    }

    /// Whether the final score can be ranked against other rows
    pub fn is_comparable(&self) -> bool {
        self.final_score.is_some_and(f64::is_finite)
    }
}

/// The leaderboard table, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelTable {
    rows: Vec<ModelRecord>,
}

impl ModelTable {
    /// Create a table from cleaned rows
    pub fn new(rows: Vec<ModelRecord>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in input order
    pub fn rows(&self) -> &[ModelRecord] {
        &self.rows
    }

    /// Mutable access for stages; rows can be edited but not added or removed
    pub(crate) fn rows_mut(&mut self) -> std::slice::IterMut<'_, ModelRecord> {
        self.rows.iter_mut()
    }

    /// Find a row by model name
    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Model names in input order
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}
