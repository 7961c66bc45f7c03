use serde::{Deserialize, Serialize};

/// One line of the input exactly as typed, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLine {
    /// Line text without its terminator.
    pub original: String,
    /// 1-based index into the split input. Never reused or reordered.
    pub line_number: usize,
}

impl RawLine {
    pub fn new(original: impl Into<String>, line_number: usize) -> Self {
        Self {
            original: original.into(),
            line_number,
        }
    }
}

/// Returns an iterator over the lines of `input`.
///
/// CRLF, CR and LF are all line breaks. Empty input has no lines; otherwise
/// a trailing break yields a final empty line, so `"a\n"` is two lines.
pub fn raw_lines(input: &str) -> impl Iterator<Item = RawLine> + '_ {
    let segments = if input.is_empty() {
        None
    } else {
        Some(split_line_breaks(input))
    };

    segments
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, text)| RawLine::new(text, index + 1))
}

/// Number of lines [`raw_lines`] would produce.
pub fn count_lines(input: &str) -> usize {
    raw_lines(input).count()
}

fn split_line_breaks(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\r', '\n']) {
            Some(idx) => {
                let break_len = if text[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[idx + break_len..]);
                Some(&text[..idx])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}
