//! Error types with actionable diagnostics.
//!
//! Every variant states what went wrong and, where the user can fix it,
//! what to do next. Data-quality problems inside a row are *not* errors:
//! those rows are kept and reported as non-comparable.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rsrc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a scoring or telemetry run.
#[derive(Error, Debug)]
pub enum Error {
    /// Leaderboard data file not found.
    #[error("Leaderboard data not found: {path}\n  → Check the path or pass the CSV file explicitly: rsrc score <DATA>")]
    DataNotFound { path: PathBuf },

    /// Scoring configuration file not found.
    #[error("Configuration file not found: {path}\n  → Generate one with `rsrc config > scoring.yaml`")]
    ConfigNotFound { path: PathBuf },

    /// Scoring configuration has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Scoring configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// CSV structure could not be read (missing column, wrong type, ragged row).
    #[error("Malformed leaderboard CSV: {message}\n  → Required columns: Model, Architecture, Year, Parameters (B), Training FLOPs, Energy/pFLOP, MMLU (5-shot)")]
    Csv { message: String },

    /// A derived column was read before the stage producing it ran.
    #[error("Column '{column}' is not available for model '{model}'\n  → Stage '{stage}' must run after the stage producing '{column}'")]
    MissingColumn { column: &'static str, model: String, stage: &'static str },

    /// A field holds a value the cleaner cannot interpret.
    #[error("Invalid value {value:?} in column '{column}' for model '{model}'\n  → Use a number or N/A")]
    InvalidField { column: &'static str, model: String, value: String },

    /// Two rows share the same model name.
    #[error("Duplicate model name '{name}' at rows {first} and {second}\n  → Model names identify rows and must be unique")]
    DuplicateModel { name: String, first: usize, second: usize },

    /// Architecture label outside {Dense, MoE} under the reject policy.
    #[error("Unknown architecture '{label}' for model '{model}'\n  → Use Dense or MoE, or set unknown_architecture: dense in the configuration")]
    UnknownArchitecture { model: String, label: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::MissingColumn { .. } | Self::Io { .. } | Self::Serialization { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataNotFound { .. } => "E001",
            Self::ConfigNotFound { .. } => "E002",
            Self::ConfigParsing { .. } => "E003",
            Self::ConfigValue { .. } => "E004",
            Self::Csv { .. } => "E010",
            Self::InvalidField { .. } => "E011",
            Self::DuplicateModel { .. } => "E012",
            Self::UnknownArchitecture { .. } => "E013",
            Self::MissingColumn { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv { message: err.to_string() }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}
