//! Leaderboard input

mod load;

pub use load::{load_leaderboard, read_leaderboard, DEFAULT_DATA_PATH};
