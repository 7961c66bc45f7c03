use crate::parsing::lexicon::leading_token_pattern;

/// Strips at most one ordinal or bullet marker from the start of `text`.
///
/// Returns the remainder and whether anything was removed. Whitespace
/// following the marker goes with it.
pub fn strip_leading_token(text: &str) -> (&str, bool) {
    match leading_token_pattern().find(text) {
        Some(m) if !m.is_empty() => (&text[m.end()..], true),
        _ => (text, false),
    }
}
