//! The roster: rated players and the ratings file they come from.
//!
//! A [`Player`] carries a display name, a handle that is unique across the
//! roster (case-insensitively), and three independent skill scores. Players
//! are built once at load time and never mutated afterwards.
//!
//! [`read_players`] loads a roster from a CSV export of the ratings sheet;
//! see its docs for the column contract.

mod csv;
mod player;

pub use self::csv::{load_players, read_players};
pub use player::{contains_handle, Player};
