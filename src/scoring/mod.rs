//! RSRC Scoring Pipeline
//!
//! Computes the RSRC training-efficiency metric for a leaderboard of models.
//! The pipeline is a fixed sequence of stages over one [`ModelTable`]:
//!
//! 1. [`clean`] - normalize MMLU and training-FLOPs text, impute MMLU
//! 2. [`efficiency`] - FLOPs efficiency score, legacy dense penalty, FLOPs cap
//! 3. [`active`] - active parameters with per-model overrides
//! 4. [`decay`] - age decay
//! 5. [`score`] - final RSRC score
//! 6. [`rank`] - stable descending ranking and rendering
//!
//! Stages add or rewrite columns; rows are never added, removed or reordered
//! until ranking, which works on a view of the table.
//!
//! Rows with missing or non-positive inputs are kept. Their score is NaN or
//! infinite, they are marked non-comparable, and they rank last.

pub mod active;
pub mod clean;
pub mod decay;
pub mod efficiency;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod score;

#[cfg(test)]
mod tests;

pub use active::{scale_active_parameters, ActiveOverrides, NoOverrides};
pub use clean::{clean, impute_mmlu, normalize_mmlu, parse_training_flops};
pub use decay::{age_decay, apply_age_decay};
pub use efficiency::{
    apply_flops_cap, apply_legacy_penalty, compute_efficiency_scores, efficiency_score,
};
pub use pipeline::{ScoringPipeline, Stage};
pub use rank::{Leaderboard, LeaderboardEntry};
pub use record::{Architecture, ModelRecord, ModelTable, RawModelRecord};
pub use score::{compute_final_scores, rsrc_score};
