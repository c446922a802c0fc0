//! Leaderboard ranking and rendering.

use super::record::{ModelRecord, ModelTable};
use crate::error::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};

const RULE: &str = "----------------------------------------------------------------------------------";
const TITLE: &str = "                              RSRC Training Efficiency Leaderboard                 ";
const NOTE: &str = "Note: RSRC scores are based on approximated data. See README.md for details.";

/// One ranked row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub model: String,
    /// Architecture label as given in the input
    pub architecture: String,
    /// Final RSRC score; NaN serializes as `null`
    pub score: f64,
    /// Whether the score is a finite number
    pub comparable: bool,
}

/// Comparable rows first, descending by score; NaN and infinite scores after
/// every finite one. Equal keys keep input order because the sort is stable.
fn rank_order(a: &ModelRecord, b: &ModelRecord) -> Ordering {
    match (a.is_comparable(), b.is_comparable()) {
        (true, true) => {
            let (sa, sb) = (a.final_score.unwrap_or(f64::NAN), b.final_score.unwrap_or(f64::NAN));
            sb.partial_cmp(&sa).unwrap_or(Ordering::Equal)
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Models ranked by final score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank a scored table without modifying it
    pub fn from_table(table: &ModelTable) -> Self {
        let mut rows: Vec<_> = table.rows().iter().collect();
        rows.sort_by(|a, b| rank_order(a, b));

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| LeaderboardEntry {
                rank: idx + 1,
                model: row.name.clone(),
                architecture: row.architecture_label.clone(),
                score: row.final_score.unwrap_or(f64::NAN),
                comparable: row.is_comparable(),
            })
            .collect();

        Self { entries }
    }

    /// Ranked entries
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that could not be scored
    pub fn non_comparable(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|e| !e.comparable)
    }

    fn top(&self, top: Option<usize>) -> &[LeaderboardEntry] {
        let n = top.unwrap_or(self.entries.len()).min(self.entries.len());
        &self.entries[..n]
    }

    /// Console table, optionally limited to the first `top` entries
    pub fn render_text(&self, top: Option<usize>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{TITLE}");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:<25} {:<15} {:<15}", "Model", "Architecture", "New RSRC");
        let _ = writeln!(out, "{RULE}");
        for entry in self.top(top) {
            let _ = writeln!(out, "{:<25} {:<15} {:<15.2}", entry.model, entry.architecture, entry.score);
        }
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "\n{NOTE}");
        out
    }

    /// JSON array, optionally limited to the first `top` entries
    pub fn to_json(&self, top: Option<usize>) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.top(top))?)
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(None))
    }
}
