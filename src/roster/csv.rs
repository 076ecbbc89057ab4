//! CSV loading of the ratings sheet.
//!
//! Column contract: a header row matched by case-insensitive prefix (see
//! [`crate::sheet`]), with the columns `Name`, `PVP`, `Gamesense` and
//! `Teamwork`. The `Name` cell holds `"<display name> <handle>"` and is
//! split at the first space. Rows with an empty `Name` cell are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::sheet;

use super::player::{contains_handle, Player};

/// Opens `path` and reads the roster out of it.
pub fn load_players(path: &Path) -> Result<Vec<Player>, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_players(file)
}

/// Reads a roster from CSV text.
///
/// Handles must be unique case-insensitively and all three scores must be
/// non-negative; violations are fatal.
pub fn read_players<R: Read>(reader: R) -> Result<Vec<Player>, ConfigError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let name_col = sheet::find_column(&headers, "Name")?;
    let pvp_col = sheet::find_column(&headers, "PVP")?;
    let gamesense_col = sheet::find_column(&headers, "Gamesense")?;
    let teamwork_col = sheet::find_column(&headers, "Teamwork")?;

    let mut players: Vec<Player> = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1, so the first data record is row 2.
        let row = index + 2;

        let raw_name = record.get(name_col).unwrap_or("");
        if raw_name.is_empty() {
            debug!("skipping row {} without a name", row);
            continue;
        }
        let (name, handle) = split_name(raw_name)?;
        if contains_handle(&players, &handle) {
            return Err(ConfigError::DuplicateHandle(handle));
        }

        let pvp = read_score(&record, &headers, pvp_col, row, &handle)?;
        let gamesense = read_score(&record, &headers, gamesense_col, row, &handle)?;
        let teamwork = read_score(&record, &headers, teamwork_col, row, &handle)?;

        info!(
            "read player {} ({}) pvp: {}, gamesense: {}, teamwork: {}",
            name, handle, pvp, gamesense, teamwork
        );
        players.push(Player::new(name, handle, pvp, gamesense, teamwork));
    }

    info!("successfully read {} players", players.len());
    Ok(players)
}

/// Splits `"<display name> <handle>"` at the first space.
fn split_name(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once(' ') {
        Some((name, handle)) if !handle.is_empty() => Ok((name.to_string(), handle.to_string())),
        _ => Err(ConfigError::NameWithoutHandle(raw.to_string())),
    }
}

/// Reads one skill score, rejecting negative values.
fn read_score(
    record: &StringRecord,
    headers: &StringRecord,
    col: usize,
    row: usize,
    handle: &str,
) -> Result<f64, ConfigError> {
    let score = sheet::read_f64(record, headers, col, row)?;
    if score < 0.0 {
        return Err(ConfigError::NegativeScore {
            handle: handle.to_string(),
            column: headers.get(col).unwrap_or("").to_string(),
            value: score,
        });
    }
    Ok(score)
}
