//! Shared helpers for the CSV sheets (roster and weights).
//!
//! Columns are located by case-insensitive prefix match on the header row,
//! so a sheet exported with `"PVP rating"` still satisfies a lookup for
//! `PVP`. Numeric cells are plain `f64` fields.

use csv::StringRecord;

use crate::error::ConfigError;

/// Index of the first header cell starting with `prefix` (case-insensitive).
pub(crate) fn find_column(headers: &StringRecord, prefix: &str) -> Result<usize, ConfigError> {
    let needle = prefix.to_ascii_lowercase();
    headers
        .iter()
        .position(|header| header.to_ascii_lowercase().starts_with(&needle))
        .ok_or_else(|| ConfigError::MissingColumn(prefix.to_string()))
}

/// Parses the cell at `col` as an `f64`.
///
/// `row` is the 1-based sheet row (header included) used in error reports.
pub(crate) fn read_f64(
    record: &StringRecord,
    headers: &StringRecord,
    col: usize,
    row: usize,
) -> Result<f64, ConfigError> {
    let value = record.get(col).unwrap_or("");
    value.parse().map_err(|_| ConfigError::BadCell {
        row,
        column: headers.get(col).unwrap_or("").to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> StringRecord {
        StringRecord::from(vec!["Name", "PVP rating", "Gamesense"])
    }

    #[test]
    fn test_find_column_matches_prefix_case_insensitively() {
        assert_eq!(find_column(&headers(), "pvp").unwrap(), 1);
        assert_eq!(find_column(&headers(), "Gamesense").unwrap(), 2);
    }

    #[test]
    fn test_find_column_reports_the_missing_prefix() {
        let err = find_column(&headers(), "Teamwork").unwrap_err();
        assert!(matches!(err, ConfigError::MissingColumn(prefix) if prefix == "Teamwork"));
    }

    #[test]
    fn test_read_f64_rejects_text() {
        let record = StringRecord::from(vec!["Troy tcn", "high", "3"]);
        let err = read_f64(&record, &headers(), 1, 2).unwrap_err();
        match err {
            ConfigError::BadCell { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "PVP rating");
                assert_eq!(value, "high");
            }
            other => panic!("expected BadCell, got {other:?}"),
        }
    }
}
