//! The situation-keyed weights table.
//!
//! Each row of the weights sheet names a situation (`"3v3v2"`, `"4v"`) and
//! the three axis weights applied when scoring teams of that shape.
//! Selection tries the exact composition key first, then the averaged
//! fallback key; a double miss is fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::sheet;

use super::profile::{fallback_signature, signature, ProfileWeights};

/// Weight profiles keyed by situation signature.
#[derive(Debug, Clone, Default)]
pub struct WeightsTable {
    profiles: HashMap<String, ProfileWeights>,
}

impl WeightsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `path` and reads the table out of it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(file)
    }

    /// Reads a weights table from CSV text.
    ///
    /// Every weight must lie in `[0, 1]` and each row must sum to exactly
    /// 1.0; violations are fatal. A situation listed twice keeps the later
    /// row.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let situation_col = sheet::find_column(&headers, "Situation")?;
        let pvp_col = sheet::find_column(&headers, "PVP")?;
        let gamesense_col = sheet::find_column(&headers, "Gamesense")?;
        let teamwork_col = sheet::find_column(&headers, "Teamwork")?;

        let mut table = Self::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1, so the first data record is row 2.
            let row = index + 2;

            let situation = record.get(situation_col).unwrap_or("");
            if situation.is_empty() {
                debug!("skipping row {} without a situation", row);
                continue;
            }

            let pvp = read_weight(&record, &headers, pvp_col, row, situation)?;
            let gamesense = read_weight(&record, &headers, gamesense_col, row, situation)?;
            let teamwork = read_weight(&record, &headers, teamwork_col, row, situation)?;

            let weights = ProfileWeights::new(pvp, gamesense, teamwork);
            // Exact equality, no epsilon.
            if weights.sum() != 1.0 {
                return Err(ConfigError::WeightSum {
                    situation: situation.to_string(),
                    sum: weights.sum(),
                });
            }

            info!(
                "read weights for situation {} pvp: {}, gamesense: {}, teamwork: {}",
                situation, pvp, gamesense, teamwork
            );
            if table.insert(situation, weights).is_some() {
                warn!(
                    "situation {} appears more than once, keeping the later row",
                    situation
                );
            }
        }

        info!("successfully read {} situations", table.len());
        Ok(table)
    }

    /// Adds a profile under `situation`, returning any entry it replaced.
    pub fn insert(
        &mut self,
        situation: impl Into<String>,
        weights: ProfileWeights,
    ) -> Option<ProfileWeights> {
        self.profiles.insert(situation.into(), weights)
    }

    pub fn get(&self, situation: &str) -> Option<&ProfileWeights> {
        self.profiles.get(situation)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolves the profile for a partition.
    ///
    /// The exact signature is tried first, then the averaged fallback; a
    /// miss on both is fatal and the error names both attempted keys.
    pub fn select(&self, team_sizes: &[usize]) -> Result<ProfileWeights, ConfigError> {
        let exact = signature(team_sizes);
        info!("looking up weights for situation {}", exact);
        if let Some(weights) = self.profiles.get(&exact) {
            apply_log(&exact, weights);
            return Ok(*weights);
        }

        let fallback = fallback_signature(team_sizes);
        info!("no weights for situation {}, trying {}", exact, fallback);
        if let Some(weights) = self.profiles.get(&fallback) {
            apply_log(&fallback, weights);
            return Ok(*weights);
        }

        Err(ConfigError::SituationNotFound { exact, fallback })
    }
}

fn apply_log(situation: &str, weights: &ProfileWeights) {
    info!(
        "applying weights for situation {} pvp: {}, gamesense: {}, teamwork: {}",
        situation, weights.pvp, weights.gamesense, weights.teamwork
    );
}

/// Reads one axis weight, which must lie in `[0, 1]`.
fn read_weight(
    record: &StringRecord,
    headers: &StringRecord,
    col: usize,
    row: usize,
    situation: &str,
) -> Result<f64, ConfigError> {
    let weight = sheet::read_f64(record, headers, col, row)?;
    if !(0.0..=1.0).contains(&weight) {
        return Err(ConfigError::WeightRange {
            situation: situation.to_string(),
            column: headers.get(col).unwrap_or("").to_string(),
            value: weight,
        });
    }
    Ok(weight)
}
