use serde::Serialize;

use crate::parsing::blocks::{ParseResult, SetlistBlock};

/// Snapshot of a parse result for testing with `insta`.
///
/// Flattens blocks into one shape so snapshots stay short and diff well.
#[derive(Serialize)]
pub struct Snap {
    /// All blocks in order.
    pub blocks: Vec<BlockSnap>,
    pub encore_count: usize,
    pub total_lines: usize,
    /// Line numbers of skipped lines.
    pub skipped: Vec<usize>,
}

/// Snapshot of a single block.
#[derive(Serialize)]
pub struct BlockSnap {
    /// "Track" or "Section".
    pub kind: String,
    /// Source line for tracks; sections have none.
    pub line: Option<usize>,
    /// Track title or section name.
    pub text: String,
    pub tags: Vec<String>,
    /// Classification flags set on a track (e.g. "non_song").
    pub flags: Vec<String>,
}

/// Converts a parse result into a serializable snapshot.
pub fn normalize(result: &ParseResult) -> Snap {
    let blocks = result
        .blocks
        .iter()
        .map(|b| match b {
            SetlistBlock::Track { track } => {
                let mut flags = vec![];
                if track.is_non_song {
                    flags.push("non_song".to_string());
                }
                BlockSnap {
                    kind: "Track".into(),
                    line: Some(track.raw.line_number),
                    text: track.title.clone(),
                    tags: track.tags.clone(),
                    flags,
                }
            }
            SetlistBlock::Section { name } => BlockSnap {
                kind: "Section".into(),
                line: None,
                text: name.clone(),
                tags: vec![],
                flags: vec![],
            },
        })
        .collect();

    Snap {
        blocks,
        encore_count: result.metadata.encore_count,
        total_lines: result.metadata.total_lines,
        skipped: result
            .metadata
            .skipped_lines
            .iter()
            .map(|r| r.line_number)
            .collect(),
    }
}
