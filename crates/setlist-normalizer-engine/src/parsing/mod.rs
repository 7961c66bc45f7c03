//! # Setlist Parsing
//!
//! Raw text is split into lines, each line is normalized on its own, and the
//! normalized lines are folded in order into blocks plus metadata:
//!
//! ```text
//! raw text -> lines -> [line::normalize_line] x N -> blocks::BlockBuilder -> ParseResult
//! ```
//!
//! Parsing is total: every string, including the empty one, yields a result.

pub mod blocks;
pub mod lexicon;
pub mod line;
pub mod lines;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

use log::debug;

use blocks::{BlockBuilder, ParseResult};
use line::normalize_line;
use lines::raw_lines;
use options::ParseOptions;

/// Parses setlist text into blocks and metadata.
///
/// Accepts a full [`ParseOptions`] or a
/// [`PartialParseOptions`](options::PartialParseOptions) whose unset fields
/// fall back to the defaults.
pub fn parse_setlist(input: &str, options: impl Into<ParseOptions>) -> ParseResult {
    let options = options.into();
    let mut builder = BlockBuilder::new(options);

    for raw in raw_lines(input) {
        builder.push(normalize_line(raw, &options));
    }

    let result = builder.finish();
    debug!(
        "parsed {} lines: {} blocks, {} encores, {} skipped",
        result.metadata.total_lines,
        result.blocks.len(),
        result.metadata.encore_count,
        result.metadata.skipped_lines.len()
    );
    result
}
