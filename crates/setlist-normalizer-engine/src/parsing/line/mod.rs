//! # Line Normalization
//!
//! Turns one [`RawLine`] into a [`NormalizedLine`] without looking at any
//! other line. The steps run in a fixed order:
//!
//! 1. **`canonical`**: NFKC plus the substitution table, then whitespace collapse
//! 2. **`leading`**: strip one ordinal or bullet marker
//! 3. **`tags`**: pull bracketed annotations out of the title
//! 4. **`delimiter`**: rejoin slash-delimited titles with `" / "`
//! 5. **`classify`**: encore and non-song flags
//!
//! Every step is total: text that does not match simply passes through.

pub mod canonical;
pub mod classify;
pub mod delimiter;
pub mod leading;
pub mod tags;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::parsing::{lines::RawLine, options::ParseOptions};

pub use canonical::{canonicalize, collapse_whitespace};
pub use classify::{detection_text, is_encore_marker, is_non_song};
pub use delimiter::join_delimited;
pub use leading::strip_leading_token;
pub use tags::extract_tags;

/// A line after normalization and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLine {
    /// Display title. May be empty when the line held only tags.
    pub title: String,
    /// Bracketed annotations, left to right, duplicates kept.
    pub tags: Vec<String>,
    pub is_encore_marker: bool,
    pub is_non_song: bool,
    /// The line this was built from.
    pub raw: RawLine,
}

impl NormalizedLine {
    /// True when neither a title nor a tag survived normalization.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.tags.is_empty()
    }
}

/// Normalizes and classifies a single line.
pub fn normalize_line(raw: RawLine, options: &ParseOptions) -> NormalizedLine {
    let canonical = collapse_whitespace(&canonicalize(&raw.original));
    let (without_token, _) = strip_leading_token(&canonical);
    let (residual, tags) = extract_tags(&collapse_whitespace(without_token));
    let title = join_delimited(&residual);

    let detection = detection_text(&title, options);
    let is_encore_marker = is_encore_marker(&detection, &tags);
    let is_non_song = is_non_song(&detection, &tags);

    trace!(
        "line {}: title={title:?} tags={tags:?} encore={is_encore_marker} non_song={is_non_song}",
        raw.line_number
    );

    NormalizedLine {
        title,
        tags,
        is_encore_marker,
        is_non_song,
        raw,
    }
}
