use serde::{Deserialize, Serialize};

use crate::parsing::{lexicon::ENCORE_SECTION_NAME, line::NormalizedLine, lines::RawLine};

/// One entry of the assembled setlist.
///
/// Serializes as `{"type":"track","track":{..}}` or
/// `{"type":"section","name":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SetlistBlock {
    /// A song or performance entry.
    Track { track: NormalizedLine },
    /// A structural marker. Only encores produce these.
    Section { name: String },
}

impl SetlistBlock {
    /// Section block for the `nth` encore marker (1-based).
    pub fn encore(nth: usize) -> Self {
        let name = if nth == 1 {
            ENCORE_SECTION_NAME.to_string()
        } else {
            format!("{ENCORE_SECTION_NAME} {nth}")
        };
        SetlistBlock::Section { name }
    }

    pub fn as_track(&self) -> Option<&NormalizedLine> {
        match self {
            SetlistBlock::Track { track } => Some(track),
            SetlistBlock::Section { .. } => None,
        }
    }

    pub fn as_section(&self) -> Option<&str> {
        match self {
            SetlistBlock::Section { name } => Some(name.as_str()),
            SetlistBlock::Track { .. } => None,
        }
    }
}

/// Counters and skipped lines gathered while assembling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    /// Encore marker lines seen, whether or not a section was emitted.
    pub encore_count: usize,
    /// Lines produced by the split step.
    pub total_lines: usize,
    /// Lines that produced no block, in input order. Never holds encore markers.
    pub skipped_lines: Vec<RawLine>,
}

/// Output of [`parse_setlist`](crate::parsing::parse_setlist).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub blocks: Vec<SetlistBlock>,
    pub metadata: ParseMetadata,
}

impl ParseResult {
    /// Track entries in order.
    pub fn tracks(&self) -> impl Iterator<Item = &NormalizedLine> {
        self.blocks.iter().filter_map(SetlistBlock::as_track)
    }

    /// Section names in order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(SetlistBlock::as_section)
    }
}

/// Why a line produced no block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left after normalization.
    Blank,
    /// Non-song entry dropped by `exclude_non_songs`.
    NonSong,
    /// Neither title nor tags to render.
    Unrenderable,
}
