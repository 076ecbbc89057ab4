//! Player records and rating arithmetic.

use crate::weights::ProfileWeights;

/// A rated participant.
///
/// `handle` is the in-game identity and is unique per roster when compared
/// case-insensitively; `name` is cosmetic. The three scores are independent
/// axes rated on the same scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub handle: String,
    pub pvp: f64,
    pub gamesense: f64,
    pub teamwork: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        pvp: f64,
        gamesense: f64,
        teamwork: f64,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            pvp,
            gamesense,
            teamwork,
        }
    }

    /// Weighted overall score under the given profile.
    pub fn overall(&self, weights: &ProfileWeights) -> f64 {
        weights.pvp * self.pvp
            + weights.gamesense * self.gamesense
            + weights.teamwork * self.teamwork
    }

    /// Plain mean of the three scores.
    ///
    /// Only used to order members when rendering a team (best first); it has
    /// no effect on which assignments are valid.
    pub fn unweighted_overall(&self) -> f64 {
        (self.pvp + self.gamesense + self.teamwork) / 3.0
    }

    /// Case-insensitive handle comparison.
    pub fn handle_is(&self, handle: &str) -> bool {
        self.handle.eq_ignore_ascii_case(handle)
    }
}

/// Whether any player in the roster uses this handle (case-insensitive).
pub fn contains_handle(roster: &[Player], handle: &str) -> bool {
    roster.iter().any(|player| player.handle_is(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player::new("Troy", "tcn", 9.0, 6.0, 3.0)
    }

    #[test]
    fn test_overall_applies_weights() {
        let player = sample();
        let weights = ProfileWeights::new(0.5, 0.3, 0.2);
        let expected = 0.5 * 9.0 + 0.3 * 6.0 + 0.2 * 3.0;
        assert!((player.overall(&weights) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unweighted_overall_is_plain_mean() {
        assert!((sample().unweighted_overall() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_handle_comparison_ignores_case() {
        let player = sample();
        assert!(player.handle_is("TCN"));
        assert!(player.handle_is("tcn"));
        assert!(!player.handle_is("tc"));
    }

    #[test]
    fn test_contains_handle() {
        let roster = vec![sample(), Player::new("Chas", "chazm", 5.0, 5.0, 5.0)];
        assert!(contains_handle(&roster, "ChazM"));
        assert!(!contains_handle(&roster, "nobody"));
    }
}
