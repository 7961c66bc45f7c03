//! Plain-text rendering of a parse result.

use setlist_normalizer_engine::{NormalizedLine, ParseResult, SetlistBlock};

/// Renders numbered tracks with section headers, followed by a summary.
///
/// Track numbers run on across sections.
pub fn render_text(result: &ParseResult, show_skipped: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut number = 0usize;

    for block in &result.blocks {
        match block {
            SetlistBlock::Track { track } => {
                number += 1;
                lines.push(format!("{number:>2}. {}", track_label(track)));
            }
            SetlistBlock::Section { name } => {
                lines.push(format!("-- {name} --"));
            }
        }
    }

    let meta = &result.metadata;
    lines.push(String::new());
    lines.push(format!(
        "{number} tracks, {} encores, {} skipped of {} lines",
        meta.encore_count,
        meta.skipped_lines.len(),
        meta.total_lines
    ));

    if show_skipped {
        for raw in &meta.skipped_lines {
            lines.push(format!("  skipped line {}: {:?}", raw.line_number, raw.original));
        }
    }

    lines
}

fn track_label(track: &NormalizedLine) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !track.title.is_empty() {
        parts.push(track.title.clone());
    }
    parts.extend(track.tags.iter().map(|tag| format!("[{tag}]")));
    if track.is_non_song {
        parts.push("(non-song)".to_string());
    }
    parts.join(" ")
}
