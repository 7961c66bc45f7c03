use unicode_normalization::UnicodeNormalization;

use crate::parsing::lexicon::EXTRA_SUBSTITUTIONS;

/// Applies NFKC, then the explicit substitution table.
///
/// NFKC folds full-width Latin, digits and most punctuation to ASCII; the
/// table covers wave dashes, curly quotes and the ideographic space.
pub fn canonicalize(text: &str) -> String {
    text.nfkc().map(substitute).collect()
}

fn substitute(c: char) -> char {
    EXTRA_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Collapses every whitespace run to one space and trims both ends.
///
/// A stray byte order mark counts as whitespace.
pub fn collapse_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '\u{feff}')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
