//! Balanced team assignment by randomized search.
//!
//! Splits a rated roster into a fixed number of teams whose weighted
//! strengths all land within a deviation band around the roster-wide
//! target, honoring pairwise separation constraints:
//!
//! - **Roster** (`roster`): players with three skill scores, loaded from a
//!   CSV sheet with prefix-matched column headers.
//! - **Weights** (`weights`): situation-keyed scoring profiles (`"3v3v2"`)
//!   with an averaged-size fallback lookup.
//! - **Restrictions** (`restrict`): `"a:b"` directives keeping two players
//!   off the same team, behind an open trait seam.
//! - **Search** (`search`): shuffle, validate team by team, deduplicate by
//!   a canonical order-insensitive hash, bounded by an output quota and
//!   two wall-clock timeout rules.
//! - **Report** (`report`): immediate or rank-deferred rendering plus a
//!   throughput summary, to any `io::Write` sink.
//!
//! # Example
//!
//! ```
//! use fairteams::search::{self, SearchConfig};
//! use fairteams::roster::Player;
//! use fairteams::restrict::SeparatePair;
//! use fairteams::weights::{ProfileWeights, WeightsTable};
//!
//! let roster = vec![
//!     Player::new("Ann", "ann", 8.0, 7.0, 6.0),
//!     Player::new("Bob", "bob", 5.0, 6.0, 7.0),
//!     Player::new("Cal", "cal", 7.0, 7.0, 7.0),
//!     Player::new("Dee", "dee", 6.0, 6.0, 6.0),
//! ];
//! let mut table = WeightsTable::new();
//! table.insert("2v2", ProfileWeights::even());
//!
//! let config = SearchConfig::new(2)
//!     .with_max_deviation(5.0)
//!     .with_output_quota(3)
//!     .with_seed(42);
//! let restrictions: &[SeparatePair] = &[];
//! let outcome = search::run(&roster, &table, restrictions, &config).unwrap();
//! assert!(outcome.stats.accepted > 0);
//! ```

pub mod error;
pub mod report;
pub mod restrict;
pub mod roster;
pub mod search;
mod sheet;
pub mod weights;
