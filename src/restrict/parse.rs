//! Parsing of `handle:handle` separation directives.

use tracing::info;

use crate::error::ConfigError;
use crate::roster::{contains_handle, Player};

use super::types::SeparatePair;

/// Parses `"a:b"` directives into separation pairs.
///
/// Each directive holds exactly one colon and both handles must resolve in
/// the roster. Resolution is exact and case-insensitive, not the prefix
/// match used for column headers.
pub fn parse_directives(
    roster: &[Player],
    directives: &[String],
) -> Result<Vec<SeparatePair>, ConfigError> {
    let mut pairs = Vec::with_capacity(directives.len());
    for directive in directives {
        let (a, b) = split_directive(directive)?;
        for handle in [a, b] {
            if !contains_handle(roster, handle) {
                return Err(ConfigError::UnknownHandle {
                    handle: handle.to_string(),
                    directive: directive.clone(),
                });
            }
        }
        info!("separating players {} and {}", a, b);
        pairs.push(SeparatePair::new(a, b)?);
    }
    Ok(pairs)
}

fn split_directive(directive: &str) -> Result<(&str, &str), ConfigError> {
    let Some((a, b)) = directive.split_once(':') else {
        return Err(ConfigError::MissingColon(directive.to_string()));
    };
    if b.contains(':') {
        return Err(ConfigError::MultipleColons(directive.to_string()));
    }
    Ok((a, b))
}
