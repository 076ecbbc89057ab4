//! Restriction kinds checked against candidate teams.

use crate::error::ConfigError;
use crate::roster::Player;

/// A validity check applied to one candidate team.
///
/// `team` holds roster indices; implementations return `false` to reject
/// the whole assignment the team belongs to.
pub trait Restriction {
    fn is_valid_team(&self, roster: &[Player], team: &[usize]) -> bool;
}

/// Keeps two players off the same team.
#[derive(Debug, Clone)]
pub struct SeparatePair {
    a: String,
    b: String,
}

impl SeparatePair {
    /// Pairs two handles, rejecting a player separated from themselves.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self, ConfigError> {
        let a = a.into();
        let b = b.into();
        if a.eq_ignore_ascii_case(&b) {
            return Err(ConfigError::SamePlayer(a));
        }
        Ok(Self { a, b })
    }

    pub fn handles(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

impl Restriction for SeparatePair {
    fn is_valid_team(&self, roster: &[Player], team: &[usize]) -> bool {
        // Handles are unique per roster, so a team can match each side at
        // most once; the second match means both players landed here.
        let mut matched = false;
        for &index in team {
            let player = &roster[index];
            if player.handle_is(&self.a) || player.handle_is(&self.b) {
                if matched {
                    return false;
                }
                matched = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new("Troy", "tcn", 9.0, 7.0, 6.0),
            Player::new("Chas", "chazm", 5.0, 5.0, 5.0),
            Player::new("Dana", "dmx", 3.0, 4.0, 8.0),
        ]
    }

    #[test]
    fn test_rejects_pairing_a_player_with_themselves() {
        let err = SeparatePair::new("tcn", "TCN").unwrap_err();
        assert!(matches!(err, ConfigError::SamePlayer(handle) if handle == "tcn"));
    }

    #[test]
    fn test_team_with_both_players_is_invalid() {
        let roster = roster();
        let pair = SeparatePair::new("tcn", "dmx").unwrap();
        assert!(!pair.is_valid_team(&roster, &[0, 2]));
        assert!(!pair.is_valid_team(&roster, &[2, 1, 0]));
    }

    #[test]
    fn test_team_with_at_most_one_player_is_valid() {
        let roster = roster();
        let pair = SeparatePair::new("tcn", "dmx").unwrap();
        assert!(pair.is_valid_team(&roster, &[0, 1]));
        assert!(pair.is_valid_team(&roster, &[2]));
        assert!(pair.is_valid_team(&roster, &[1]));
    }

    #[test]
    fn test_handle_match_ignores_case() {
        let roster = roster();
        let pair = SeparatePair::new("TCN", "Dmx").unwrap();
        assert!(!pair.is_valid_team(&roster, &[0, 2]));
    }
}
