//! Profile weights and composition signatures.

use itertools::Itertools;

/// How much each skill axis contributes to a player's overall score.
///
/// Each weight lies in `[0, 1]` and the three must sum to exactly 1.0;
/// the table loader enforces that per row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileWeights {
    pub pvp: f64,
    pub gamesense: f64,
    pub teamwork: f64,
}

impl ProfileWeights {
    pub fn new(pvp: f64, gamesense: f64, teamwork: f64) -> Self {
        Self {
            pvp,
            gamesense,
            teamwork,
        }
    }

    /// An even split across the three axes.
    pub fn even() -> Self {
        Self::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)
    }

    pub fn sum(&self) -> f64 {
        self.pvp + self.gamesense + self.teamwork
    }
}

/// Builds the exact lookup key for a partition: `[3, 3, 2]` → `"3v3v2"`.
///
/// The key is order-sensitive on purpose; `"3v2"` and `"2v3"` are distinct
/// situations.
pub fn signature(team_sizes: &[usize]) -> String {
    team_sizes.iter().join("v")
}

/// Builds the averaged-size fallback key: `[3, 3, 2]` → `"3v"`.
///
/// The average rounds through `floor(mean + 0.49999)`, so anything at or
/// below an exact .5 rounds down.
pub fn fallback_signature(team_sizes: &[usize]) -> String {
    let mean = team_sizes.iter().sum::<usize>() as f64 / team_sizes.len() as f64;
    let average = (mean + 0.49999).floor() as usize;
    format!("{average}v")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_joins_sizes_in_order() {
        assert_eq!(signature(&[3, 3, 2]), "3v3v2");
        assert_eq!(signature(&[2, 3]), "2v3");
        assert_eq!(signature(&[4]), "4");
    }

    #[test]
    fn test_fallback_signature_rounds_the_mean_half_down() {
        // mean 8/3 = 2.67 rounds up
        assert_eq!(fallback_signature(&[3, 3, 2]), "3v");
        // mean 2.4 rounds down
        assert_eq!(fallback_signature(&[3, 2, 3, 2, 2]), "2v");
        // the exact .5 tie rounds down through the 0.49999 constant
        assert_eq!(fallback_signature(&[3, 2]), "2v");
        assert_eq!(fallback_signature(&[4, 4]), "4v");
    }

    #[test]
    fn test_even_profile_sums_to_one() {
        assert!((ProfileWeights::even().sum() - 1.0).abs() < 1e-12);
    }
}
