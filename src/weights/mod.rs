//! Scoring profiles and the situations table.
//!
//! A [`ProfileWeights`] says how much each skill axis counts towards a
//! player's overall score for one match shape. The [`WeightsTable`] maps
//! composition signatures (the ordered team sizes joined by `v`, e.g.
//! `"3v3v2"`) to profiles and resolves the profile for a concrete
//! partition, falling back to an averaged-size key (`"3v"`) when no exact
//! signature is present.

mod profile;
mod table;

pub use profile::{fallback_signature, signature, ProfileWeights};
pub use table::WeightsTable;
