//! The shuffle-validate-dedup loop.

use std::collections::HashSet;
use std::time::Instant;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};

use crate::error::ConfigError;
use crate::restrict::Restriction;
use crate::roster::Player;
use crate::weights::{ProfileWeights, WeightsTable};

use super::config::SearchConfig;
use super::types::{
    canonical_hash, team_sizes, team_strength, Assignment, SearchOutcome, SearchStats, StopCause,
};

/// Runs the search, buffering accepted assignments when deferred mode is on.
pub fn run<R: Restriction>(
    roster: &[Player],
    table: &WeightsTable,
    restrictions: &[R],
    config: &SearchConfig,
) -> Result<SearchOutcome, ConfigError> {
    run_with_observer(roster, table, restrictions, config, |_, _, _| {})
}

/// Runs the search, invoking `observer` with the discovery ordinal and the
/// resolved weights every time a new unique assignment is accepted.
///
/// Two clocks share `config.timeout`: a retry burst that cannot validate a
/// single shuffle within it ends the run with [`StopCause::RetryTimeout`],
/// and a full timeout of nothing but already-seen assignments ends it with
/// [`StopCause::Exhausted`].
pub fn run_with_observer<R, F>(
    roster: &[Player],
    table: &WeightsTable,
    restrictions: &[R],
    config: &SearchConfig,
    mut observer: F,
) -> Result<SearchOutcome, ConfigError>
where
    R: Restriction,
    F: FnMut(usize, &Assignment, &ProfileWeights),
{
    config.validate(roster.len())?;

    let sizes = team_sizes(roster.len(), config.team_count);
    let weights = table.select(&sizes)?;

    let mean = roster
        .iter()
        .map(|player| player.overall(&weights))
        .sum::<f64>()
        / roster.len() as f64;
    let target = mean * (roster.len() as f64 / config.team_count as f64);

    info!("match is set for: {}", sizes.iter().join(" v "));
    info!(
        "target team strength {} with max deviation {}",
        target, config.max_deviation
    );
    info!("searching for teams... this may take a while");

    let is_valid = |permutation: &[usize], stats: &mut SearchStats| -> bool {
        let mut start = 0;
        for &size in &sizes {
            let team = &permutation[start..start + size];
            start += size;

            let strength = team_strength(roster, team, &weights);
            if (target - strength).abs() > config.max_deviation {
                stats.value_out_of_range += 1;
                return false;
            }
            for restriction in restrictions {
                if !restriction.is_valid_team(roster, team) {
                    stats.restriction_failed += 1;
                    return false;
                }
            }
        }
        true
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut permutation: Vec<usize> = (0..roster.len()).collect();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut assignments: Vec<Assignment> = Vec::new();
    let mut stats = SearchStats::default();
    let mut stop = StopCause::QuotaFilled;

    let run_start = Instant::now();
    let mut last_found = Instant::now();

    'search: while stats.accepted < config.output_quota {
        let burst_start = Instant::now();
        permutation.shuffle(&mut rng);
        stats.evaluated += 1;

        // This loop is the whole retry mechanism: reshuffle until a draw
        // validates or the burst runs out of time.
        while !is_valid(&permutation, &mut stats) {
            if burst_start.elapsed() > config.timeout {
                stop = StopCause::RetryTimeout;
                break 'search;
            }
            permutation.shuffle(&mut rng);
            stats.evaluated += 1;
        }

        let hash = canonical_hash(&permutation, &sizes);
        if seen.insert(hash) {
            stats.accepted += 1;
            last_found = Instant::now();
            debug!("accepted team set {} (hash {})", stats.accepted, hash);
            let assignment = Assignment::new(permutation.clone(), sizes.clone());
            observer(stats.accepted, &assignment, &weights);
            if config.deferred {
                assignments.push(assignment);
            }
        } else if last_found.elapsed() > config.timeout {
            stop = StopCause::Exhausted;
            break 'search;
        }
    }

    stats.elapsed = run_start.elapsed();

    match stop {
        StopCause::QuotaFilled => {
            info!("found {} team sets in {:?}", stats.accepted, stats.elapsed)
        }
        StopCause::Exhausted => warn!(
            "no new team set within {:?}, stopping with {} found",
            config.timeout, stats.accepted
        ),
        StopCause::RetryTimeout => error!(
            "no valid team set within {:?}, giving up after {} shuffles",
            config.timeout, stats.evaluated
        ),
    }

    Ok(SearchOutcome {
        assignments,
        weights,
        stats,
        stop,
    })
}
