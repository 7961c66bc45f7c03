use log::debug;

use crate::parsing::{line::NormalizedLine, lines::RawLine, options::ParseOptions};

use super::types::{ParseMetadata, ParseResult, SetlistBlock, SkipReason};

/// Folds normalized lines, in input order, into blocks and metadata.
///
/// The accumulators only record outcomes; they never feed back into how a
/// line is classified.
pub struct BlockBuilder {
    options: ParseOptions,
    blocks: Vec<SetlistBlock>,
    skipped_lines: Vec<RawLine>,
    encore_count: usize,
    total_lines: usize,
}

impl BlockBuilder {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            blocks: vec![],
            skipped_lines: vec![],
            encore_count: 0,
            total_lines: 0,
        }
    }

    /// Applies the first matching rule:
    /// encore marker, empty line, excluded non-song, unrenderable, track.
    pub fn push(&mut self, line: NormalizedLine) {
        self.total_lines += 1;

        if line.is_encore_marker {
            self.open_encore();
            return;
        }

        if line.is_empty() {
            self.skip(line.raw, SkipReason::Blank);
            return;
        }

        if line.is_non_song && self.options.exclude_non_songs {
            self.skip(line.raw, SkipReason::NonSong);
            return;
        }

        if !is_renderable(&line) {
            self.skip(line.raw, SkipReason::Unrenderable);
            return;
        }

        self.blocks.push(SetlistBlock::Track { track: line });
    }

    pub fn finish(self) -> ParseResult {
        ParseResult {
            blocks: self.blocks,
            metadata: ParseMetadata {
                encore_count: self.encore_count,
                total_lines: self.total_lines,
                skipped_lines: self.skipped_lines,
            },
        }
    }

    fn open_encore(&mut self) {
        self.encore_count += 1;
        if self.options.keep_encore_markers {
            self.blocks.push(SetlistBlock::encore(self.encore_count));
        }
    }

    fn skip(&mut self, raw: RawLine, reason: SkipReason) {
        debug!("skipping line {} ({reason:?}): {:?}", raw.line_number, raw.original);
        self.skipped_lines.push(raw);
    }
}

fn is_renderable(line: &NormalizedLine) -> bool {
    !line.title.is_empty() || !line.tags.is_empty()
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
