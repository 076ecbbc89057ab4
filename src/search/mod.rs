//! Randomized assignment search.
//!
//! The engine deals the roster into a round-robin partition, then shuffles
//! the whole permutation and validates team by team against the score band
//! and the separation restrictions, deduplicating accepted assignments by a
//! canonical hash. Two clocks bound the run on the same timeout budget: a
//! retry burst that never validates is a fatal stop, while a timeout
//! without any NEW unique assignment ends the run successfully.

mod config;
mod runner;
mod types;

pub use config::SearchConfig;
pub use runner::{run, run_with_observer};
pub use types::{
    canonical_hash, team_sizes, team_strength, Assignment, SearchOutcome, SearchStats, StopCause,
};
