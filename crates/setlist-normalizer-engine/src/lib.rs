pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{BlockBuilder, ParseMetadata, ParseResult, SetlistBlock},
    line::{NormalizedLine, normalize_line},
    lines::{RawLine, raw_lines},
    options::{ParseOptions, PartialParseOptions},
    parse_setlist,
};
