use crate::parsing::lexicon::{CANONICAL_DELIMITER, delimiter_pattern};

use super::canonical::collapse_whitespace;

/// Rewrites slash-delimited titles to use `" / "` between parts.
///
/// Medleys stay a single title; nothing here splits tracks.
pub fn join_delimited(title: &str) -> String {
    let pattern = delimiter_pattern();
    if !pattern.is_match(title) {
        return title.to_string();
    }

    pattern
        .split(title)
        .map(collapse_whitespace)
        .collect::<Vec<_>>()
        .join(CANONICAL_DELIMITER)
}
