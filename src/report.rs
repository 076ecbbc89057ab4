//! Rendering of accepted assignments and the run summary.
//!
//! All output goes through a caller-supplied [`io::Write`] sink, kept apart
//! from the log stream so reports can be piped or written to a file.

use std::io::{self, Write};

use crate::roster::Player;
use crate::search::{team_strength, Assignment, SearchStats};
use crate::weights::ProfileWeights;

/// Writes one assignment: the ordinal header, then each team's strength
/// line and its members from best to worst plain mean. Teams are numbered
/// from zero.
pub fn render_assignment<W: Write>(
    out: &mut W,
    ordinal: usize,
    assignment: &Assignment,
    roster: &[Player],
    weights: &ProfileWeights,
) -> io::Result<()> {
    writeln!(
        out,
        "TEAM-SET #{} - delta: {}",
        ordinal,
        assignment.delta_strength(roster, weights)
    )?;
    for (index, team) in assignment.teams().enumerate() {
        writeln!(
            out,
            "Team #{} strength {}",
            index,
            team_strength(roster, team, weights)
        )?;
        let mut members: Vec<&Player> = team.iter().map(|&i| &roster[i]).collect();
        members.sort_by(|a, b| b.unweighted_overall().total_cmp(&a.unweighted_overall()));
        for player in members {
            writeln!(out, "{} ({})", player.name, player.handle)?;
        }
    }
    Ok(())
}

/// Writes every buffered assignment ranked from least to most balanced.
///
/// Assignments print in descending delta order with counting-down ordinals,
/// so the most balanced one lands at the bottom of the report as `#1`.
pub fn render_ranked<W: Write>(
    out: &mut W,
    assignments: &[Assignment],
    roster: &[Player],
    weights: &ProfileWeights,
) -> io::Result<()> {
    let mut ranked: Vec<(f64, &Assignment)> = assignments
        .iter()
        .map(|assignment| (assignment.delta_strength(roster, weights), assignment))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut ordinal = ranked.len();
    for (_, assignment) in ranked {
        render_assignment(out, ordinal, assignment, roster, weights)?;
        ordinal -= 1;
    }
    Ok(())
}

/// Writes the run summary: totals, throughput, and the rejection tallies.
pub fn render_summary<W: Write>(out: &mut W, stats: &SearchStats) -> io::Result<()> {
    let secs = stats.elapsed.as_secs_f64();
    writeln!(out)?;
    writeln!(
        out,
        "found {} unique team sets in {:.3} seconds",
        stats.accepted, secs
    )?;
    if stats.evaluated > 0 && secs > 0.0 {
        let per_second = stats.evaluated as f64 / secs;
        let nanos_each = stats.elapsed.as_nanos() / u128::from(stats.evaluated);
        writeln!(
            out,
            "evaluated {} shuffles ({:.0} per second, {} ns each)",
            stats.evaluated, per_second, nanos_each
        )?;
    } else {
        writeln!(out, "evaluated {} shuffles", stats.evaluated)?;
    }
    writeln!(
        out,
        "{} shuffles had a team outside the score band",
        stats.value_out_of_range
    )?;
    writeln!(
        out,
        "{} shuffles failed a separation restriction",
        stats.restriction_failed
    )?;
    Ok(())
}
