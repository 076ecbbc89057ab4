//! Assignment representation, canonical hashing, and run outcomes.

use std::time::Duration;

use crate::roster::Player;
use crate::weights::ProfileWeights;

/// Splits `roster_len` players into `team_count` team sizes.
///
/// Players are dealt round-robin, so the first `roster_len % team_count`
/// teams carry one extra member and no two sizes differ by more than 1.
pub fn team_sizes(roster_len: usize, team_count: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; team_count];
    for player in 0..roster_len {
        sizes[player % team_count] += 1;
    }
    sizes
}

/// Weighted strength of one team slice.
pub fn team_strength(roster: &[Player], team: &[usize], weights: &ProfileWeights) -> f64 {
    team.iter()
        .map(|&index| roster[index].overall(weights))
        .sum()
}

/// Order-insensitive fingerprint of a candidate split.
///
/// Each team folds its ascending member indices with `h = 61*h + index`
/// seeded at 1; the per-team hashes are then sorted and folded with
/// `r = 31*r + h`, also seeded at 1, in wrapping u64 arithmetic. Splits
/// that group the same players together hash equal no matter how members
/// or teams are ordered. The fold is not injective, so a pair of distinct
/// splits can collide and deduplicate to one.
pub fn canonical_hash(permutation: &[usize], sizes: &[usize]) -> u64 {
    let mut team_hashes = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for &size in sizes {
        let mut members = permutation[start..start + size].to_vec();
        start += size;
        members.sort_unstable();
        let hash = members.iter().fold(1u64, |hash, &index| {
            hash.wrapping_mul(61).wrapping_add(index as u64)
        });
        team_hashes.push(hash);
    }
    team_hashes.sort_unstable();
    team_hashes.iter().fold(1u64, |hash, &team_hash| {
        hash.wrapping_mul(31).wrapping_add(team_hash)
    })
}

/// One complete placement of the roster into teams.
///
/// The permutation holds roster indices; consecutive runs of the partition
/// sizes slice it into teams.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    permutation: Vec<usize>,
    sizes: Vec<usize>,
}

impl Assignment {
    pub(crate) fn new(permutation: Vec<usize>, sizes: Vec<usize>) -> Self {
        Self { permutation, sizes }
    }

    /// Teams in partition order, each a slice of roster indices.
    pub fn teams(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut start = 0;
        self.sizes.iter().map(move |&size| {
            let team = &self.permutation[start..start + size];
            start += size;
            team
        })
    }

    pub fn team_count(&self) -> usize {
        self.sizes.len()
    }

    /// Strength gap between the strongest and the weakest team.
    pub fn delta_strength(&self, roster: &[Player], weights: &ProfileWeights) -> f64 {
        let mut weakest = f64::INFINITY;
        let mut strongest = f64::NEG_INFINITY;
        for team in self.teams() {
            let strength = team_strength(roster, team, weights);
            weakest = weakest.min(strength);
            strongest = strongest.max(strength);
        }
        strongest - weakest
    }
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    /// The requested number of unique assignments was found.
    QuotaFilled,
    /// A full timeout passed without a new unique assignment turning up;
    /// the reachable space is most likely exhausted.
    Exhausted,
    /// A retry burst ran past the timeout without validating once.
    RetryTimeout,
}

impl StopCause {
    /// Only a retry timeout makes the run a failure.
    pub fn is_failure(self) -> bool {
        matches!(self, StopCause::RetryTimeout)
    }
}

/// Counters accumulated across one run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Shuffles evaluated, counting rejected and duplicate ones.
    pub evaluated: u64,

    /// Unique valid assignments accepted.
    pub accepted: usize,

    /// Team checks that failed the score band.
    pub value_out_of_range: u64,

    /// Team checks that failed a separation restriction.
    pub restriction_failed: u64,

    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Accepted assignments in discovery order. Stays empty when deferred
    /// mode is off and the caller consumes results through the observer.
    pub assignments: Vec<Assignment>,

    /// The weights profile the run resolved for its partition.
    pub weights: ProfileWeights,

    /// Diagnostic counters.
    pub stats: SearchStats,

    /// Why the run ended.
    pub stop: StopCause,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_sizes_deal_round_robin() {
        assert_eq!(team_sizes(8, 3), vec![3, 3, 2]);
        assert_eq!(team_sizes(6, 2), vec![3, 3]);
        assert_eq!(team_sizes(4, 3), vec![2, 1, 1]);
        assert_eq!(team_sizes(5, 5), vec![1, 1, 1, 1, 1]);
        assert_eq!(team_sizes(7, 1), vec![7]);
    }

    #[test]
    fn test_canonical_hash_known_value() {
        // Teams [0, 1] and [2, 3]: 61 * 61 + 1 = 3722, 61 * 63 + 3 = 3846,
        // then 31 * (31 + 3722) + 3846 = 120189.
        assert_eq!(canonical_hash(&[0, 1, 2, 3], &[2, 2]), 120189);
    }

    #[test]
    fn test_canonical_hash_ignores_member_and_team_order() {
        let reference = canonical_hash(&[0, 1, 2, 3], &[2, 2]);
        assert_eq!(canonical_hash(&[1, 0, 3, 2], &[2, 2]), reference);
        assert_eq!(canonical_hash(&[2, 3, 0, 1], &[2, 2]), reference);
        assert_eq!(canonical_hash(&[3, 2, 1, 0], &[2, 2]), reference);
    }

    #[test]
    fn test_canonical_hash_separates_different_partitions() {
        let reference = canonical_hash(&[0, 1, 2, 3], &[2, 2]);
        // Teams [0, 2] and [1, 3]: 3723 and 3785 fold to 120159.
        assert_eq!(canonical_hash(&[0, 2, 1, 3], &[2, 2]), 120159);
        assert_ne!(canonical_hash(&[0, 2, 1, 3], &[2, 2]), reference);
    }

    #[test]
    fn test_canonical_hash_collides_for_some_distinct_splits() {
        // Teams [0, 3] and [1, 2] give team hashes 3724 and 3784, and
        // 31 * (31 + 3724) + 3784 = 120189, the same value as the
        // [0, 1] | [2, 3] split. The dedup counts such a pair as one
        // team set.
        assert_eq!(canonical_hash(&[0, 3, 1, 2], &[2, 2]), 120189);
        assert_eq!(
            canonical_hash(&[0, 3, 1, 2], &[2, 2]),
            canonical_hash(&[0, 1, 2, 3], &[2, 2])
        );
    }

    #[test]
    fn test_assignment_teams_follow_partition_sizes() {
        let assignment = Assignment::new(vec![4, 0, 3, 1, 2], vec![2, 2, 1]);
        let teams: Vec<&[usize]> = assignment.teams().collect();
        assert_eq!(teams, vec![&[4, 0][..], &[3, 1][..], &[2][..]]);
        assert_eq!(assignment.team_count(), 3);
    }

    #[test]
    fn test_delta_strength_spans_weakest_to_strongest() {
        let roster = vec![
            Player::new("A", "a", 9.0, 9.0, 9.0),
            Player::new("B", "b", 1.0, 1.0, 1.0),
            Player::new("C", "c", 5.0, 5.0, 5.0),
            Player::new("D", "d", 5.0, 5.0, 5.0),
        ];
        let weights = ProfileWeights::even();
        // Teams [A, B] and [C, D] both sum to 10, delta 0.
        let balanced = Assignment::new(vec![0, 1, 2, 3], vec![2, 2]);
        assert!(balanced.delta_strength(&roster, &weights).abs() < 1e-9);
        // Teams [A, C] = 14 and [B, D] = 6, delta 8.
        let skewed = Assignment::new(vec![0, 2, 1, 3], vec![2, 2]);
        assert!((skewed.delta_strength(&roster, &weights) - 8.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::*;

    proptest! {
        #[test]
        fn prop_partition_sums_and_stays_balanced(
            roster_len in 1usize..48,
            team_count in 1usize..12,
        ) {
            prop_assume!(team_count <= roster_len);
            let sizes = team_sizes(roster_len, team_count);
            prop_assert_eq!(sizes.len(), team_count);
            prop_assert_eq!(sizes.iter().sum::<usize>(), roster_len);
            let largest = *sizes.iter().max().unwrap();
            let smallest = *sizes.iter().min().unwrap();
            prop_assert!(largest - smallest <= 1);
            prop_assert!(smallest >= 1);
        }

        #[test]
        fn prop_hash_ignores_team_and_member_order(
            roster_len in 2usize..24,
            team_count in 1usize..8,
            seed in any::<u64>(),
        ) {
            prop_assume!(team_count <= roster_len);
            let sizes = team_sizes(roster_len, team_count);
            let mut permutation: Vec<usize> = (0..roster_len).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            permutation.shuffle(&mut rng);
            let reference = canonical_hash(&permutation, &sizes);

            // Reverse members within each team and list the teams backwards.
            let mut teams: Vec<Vec<usize>> = Vec::with_capacity(team_count);
            let mut start = 0;
            for &size in &sizes {
                teams.push(permutation[start..start + size].to_vec());
                start += size;
            }
            let mut reordered = Vec::with_capacity(roster_len);
            let mut reordered_sizes = Vec::with_capacity(team_count);
            for team in teams.iter().rev() {
                let mut members = team.clone();
                members.reverse();
                reordered_sizes.push(members.len());
                reordered.extend(members);
            }
            prop_assert_eq!(canonical_hash(&reordered, &reordered_sizes), reference);
        }
    }
}
