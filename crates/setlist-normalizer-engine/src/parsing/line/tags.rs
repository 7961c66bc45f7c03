use crate::parsing::lexicon::tag_pattern;

use super::canonical::collapse_whitespace;

/// Pulls every bracketed span out of `text`.
///
/// Returns the residual title (spans replaced by a space, whitespace
/// collapsed) and the trimmed inner texts in order of appearance. Empty
/// brackets such as `()` are not tags and stay in the title.
pub fn extract_tags(text: &str) -> (String, Vec<String>) {
    let pattern = tag_pattern();

    let tags = pattern
        .captures_iter(text)
        .filter_map(|caps| caps.iter().skip(1).flatten().next())
        .map(|inner| collapse_whitespace(inner.as_str()))
        .collect();

    let title = collapse_whitespace(&pattern.replace_all(text, " "));
    (title, tags)
}
