//! Encore and non-song classification.
//!
//! Two independent checks run for each kind: one over the line's detection
//! string and one over each tag on its own. A line with an empty title can
//! still classify through its tags.

use crate::parsing::{
    lexicon::{ENCORE_TOKENS, NON_SONG_KEYWORDS, encore_pattern, non_song_patterns},
    options::ParseOptions,
};

use super::canonical::canonicalize;

/// Builds the string used for classification from a finished title.
///
/// Lowercased unless `ignore_case` is off.
pub fn detection_text(title: &str, options: &ParseOptions) -> String {
    if options.ignore_case {
        title.to_lowercase()
    } else {
        title.to_string()
    }
}

/// True if the detection string or any tag marks an encore.
pub fn is_encore_marker(detection: &str, tags: &[String]) -> bool {
    encore_pattern().is_match(detection) || tags.iter().any(|tag| is_encore_tag(tag))
}

/// True if the detection string or any tag marks a non-song entry.
pub fn is_non_song(detection: &str, tags: &[String]) -> bool {
    matches_non_song(detection) || tags.iter().any(|tag| is_non_song_tag(tag))
}

pub fn is_encore_tag(tag: &str) -> bool {
    let tag = tag_detection_text(tag);
    encore_pattern().is_match(&tag) || ENCORE_TOKENS.contains(&tag.as_str())
}

pub fn is_non_song_tag(tag: &str) -> bool {
    matches_non_song(&tag_detection_text(tag))
}

/// Tags are always compared lowercased, whatever `ignore_case` says.
fn tag_detection_text(tag: &str) -> String {
    canonicalize(tag).to_lowercase()
}

/// Exact keyword equality, then the pattern set.
fn matches_non_song(text: &str) -> bool {
    NON_SONG_KEYWORDS.contains(&text) || non_song_patterns().is_match(text)
}
