//! Leaderboard loading

use crate::error::{Error, Result};
use crate::scoring::RawModelRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the leaderboard CSV
pub const DEFAULT_DATA_PATH: &str = "data/model_leaderboard.csv";

/// Load raw leaderboard rows from a CSV file
///
/// # Arguments
///
/// * `path` - CSV file with a header row
///
/// Columns other than the seven required ones are ignored. Cells are
/// trimmed before parsing.
///
/// # Example
///
/// ```no_run
/// use rsrc::io::load_leaderboard;
///
/// let rows = load_leaderboard("data/model_leaderboard.csv").expect("failed to load leaderboard");
/// println!("Loaded {} models", rows.len());
/// ```
pub fn load_leaderboard(path: impl AsRef<Path>) -> Result<Vec<RawModelRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::DataNotFound { path: path.to_path_buf() },
        _ => Error::io(format!("opening {}", path.display()), e),
    })?;
    read_leaderboard(file)
}

/// Read raw leaderboard rows from any CSV source
pub fn read_leaderboard<R: Read>(reader: R) -> Result<Vec<RawModelRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = rdr.deserialize().collect::<std::result::Result<Vec<RawModelRecord>, _>>()?;
    tracing::debug!(rows = rows.len(), "loaded leaderboard");
    Ok(rows)
}
