//! # rsrc
//!
//! Training-efficiency scoring for model leaderboards.
//!
//! The RSRC metric rewards models that reach their size with little training
//! compute and energy. A leaderboard CSV is cleaned, pushed through a fixed
//! sequence of scoring stages and ranked:
//!
//! - [`io`]: leaderboard CSV loading
//! - [`scoring`]: cleaning, scoring stages, ranking and rendering
//! - [`config`]: scoring constants (YAML) and CLI arguments
//! - [`monitor`]: GPU power sampling
//! - [`cli`]: command handlers for the `rsrc` binary
//!
//! # Example
//!
//! ```no_run
//! use rsrc::config::ScoringConfig;
//! use rsrc::io::load_leaderboard;
//! use rsrc::scoring::ScoringPipeline;
//!
//! let rows = load_leaderboard("data/model_leaderboard.csv")?;
//! let board = ScoringPipeline::new(ScoringConfig::default()).run(&rows)?;
//! print!("{board}");
//! # Ok::<(), rsrc::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod monitor;
pub mod scoring;

pub use error::{Error, Result};
