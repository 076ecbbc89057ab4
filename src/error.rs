//! Error taxonomy shared by the loaders, the constraint parser, and the
//! search setup.
//!
//! Every variant is a configuration problem: malformed or missing input,
//! or run parameters that cannot produce a search. All of them are fatal
//! and are raised before any search work begins. The search loop itself
//! never fails with a `ConfigError`; its two timeout outcomes are reported
//! through [`StopCause`](crate::search::StopCause) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal problem with the input files, directives, or run parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed csv input")]
    Csv(#[from] csv::Error),

    #[error("no column header starts with \"{0}\"")]
    MissingColumn(String),

    #[error("row {row}: expected a number in column \"{column}\", got \"{value}\"")]
    BadCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("player name \"{0}\" has no space separating display name and handle")]
    NameWithoutHandle(String),

    #[error("duplicate player handle \"{0}\" (handles are compared case-insensitively)")]
    DuplicateHandle(String),

    #[error("player \"{handle}\" has a negative {column} score: {value}")]
    NegativeScore {
        handle: String,
        column: String,
        value: f64,
    },

    #[error("weight {column} for situation \"{situation}\" must be in [0, 1], got {value}")]
    WeightRange {
        situation: String,
        column: String,
        value: f64,
    },

    #[error("weights for situation \"{situation}\" sum to {sum}, expected exactly 1")]
    WeightSum { situation: String, sum: f64 },

    #[error("failed to find situation \"{fallback}\" after 2 attempts, also tried \"{exact}\"")]
    SituationNotFound { exact: String, fallback: String },

    #[error("expected a colon (:) separating the two handles to keep apart: \"{0}\"")]
    MissingColon(String),

    #[error("multiple colons (:) are not allowed when separating two handles: \"{0}\"")]
    MultipleColons(String),

    #[error("failed to find player \"{handle}\" named in directive \"{directive}\"")]
    UnknownHandle { handle: String, directive: String },

    #[error("cannot separate \"{0}\" from itself")]
    SamePlayer(String),

    #[error("the roster is empty")]
    EmptyRoster,

    #[error("team count must be between 1 and the roster size ({roster}), got {requested}")]
    BadTeamCount { requested: usize, roster: usize },

    #[error("max deviation must be a non-negative number, got {0}")]
    BadDeviation(f64),

    #[error("the output limit must be at least 1")]
    ZeroLimit,
}
