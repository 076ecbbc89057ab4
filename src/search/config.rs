//! Search configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for one assignment search run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fairteams::search::SearchConfig;
///
/// let config = SearchConfig::new(3)
///     .with_max_deviation(2.5)
///     .with_output_quota(20)
///     .with_timeout(Duration::from_secs(5))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of teams to split the roster into.
    pub team_count: usize,

    /// How far a team's strength may drift from the target average.
    pub max_deviation: f64,

    /// Stop after this many unique assignments.
    pub output_quota: usize,

    /// Budget for both clocks: the invalid-retry burst and the window
    /// without a new unique assignment.
    pub timeout: Duration,

    /// Buffer assignments for ranked output instead of streaming them.
    pub deferred: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new(team_count: usize) -> Self {
        Self {
            team_count,
            max_deviation: 1.0,
            output_quota: 1000,
            timeout: Duration::from_secs(15),
            deferred: true,
            seed: None,
        }
    }

    pub fn with_max_deviation(mut self, deviation: f64) -> Self {
        self.max_deviation = deviation;
        self
    }

    pub fn with_output_quota(mut self, quota: usize) -> Self {
        self.output_quota = quota;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_deferred(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against the roster it will split.
    pub fn validate(&self, roster_len: usize) -> Result<(), ConfigError> {
        if roster_len == 0 {
            return Err(ConfigError::EmptyRoster);
        }
        if self.team_count == 0 || self.team_count > roster_len {
            return Err(ConfigError::BadTeamCount {
                requested: self.team_count,
                roster: roster_len,
            });
        }
        if self.max_deviation.is_nan() || self.max_deviation < 0.0 {
            return Err(ConfigError::BadDeviation(self.max_deviation));
        }
        if self.output_quota == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::new(2);
        assert_eq!(config.team_count, 2);
        assert!((config.max_deviation - 1.0).abs() < 1e-12);
        assert_eq!(config.output_quota, 1000);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.deferred);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::new(2).validate(6).is_ok());
        assert!(SearchConfig::new(6).validate(6).is_ok());
        assert!(SearchConfig::new(1).with_max_deviation(0.0).validate(1).is_ok());
    }

    #[test]
    fn test_validate_empty_roster() {
        let err = SearchConfig::new(2).validate(0).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRoster));
    }

    #[test]
    fn test_validate_team_count_bounds() {
        assert!(matches!(
            SearchConfig::new(0).validate(6).unwrap_err(),
            ConfigError::BadTeamCount { requested: 0, roster: 6 }
        ));
        assert!(matches!(
            SearchConfig::new(7).validate(6).unwrap_err(),
            ConfigError::BadTeamCount { requested: 7, roster: 6 }
        ));
    }

    #[test]
    fn test_validate_bad_deviation() {
        let config = SearchConfig::new(2).with_max_deviation(-0.5);
        assert!(matches!(config.validate(6), Err(ConfigError::BadDeviation(_))));
        let config = SearchConfig::new(2).with_max_deviation(f64::NAN);
        assert!(matches!(config.validate(6), Err(ConfigError::BadDeviation(_))));
    }

    #[test]
    fn test_validate_zero_quota() {
        let config = SearchConfig::new(2).with_output_quota(0);
        assert!(matches!(config.validate(6), Err(ConfigError::ZeroLimit)));
    }
}
