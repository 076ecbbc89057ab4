//! Pairwise separation constraints.
//!
//! A restriction invalidates candidate teams during the search. The only
//! built-in kind is [`SeparatePair`], which keeps two named players off the
//! same team; the [`Restriction`] trait is the seam for adding other kinds.

mod parse;
mod types;

pub use parse::parse_directives;
pub use types::{Restriction, SeparatePair};
