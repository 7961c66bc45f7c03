//! Lexical tables consumed read-only by the line normalizer.
//!
//! Literal tables are `const` slices. Compiled matchers live in `OnceLock`s and
//! are built on first use; `Regex` carries no scan cursor, so a single instance
//! is shared by every caller.

use std::sync::OnceLock;

use regex::{Regex, RegexSet};

/// Detection strings that mark a line as a non-song entry when equal.
pub const NON_SONG_KEYWORDS: &[&str] = &[
    "mc",
    "m.c.",
    "stage talk",
    "talk",
    "mcコーナー",
    "トーク",
    "interlude",
    "instrumental",
    "intro",
    "outro",
    "opening",
    "ending",
    "se",
    "vtr",
    "member introduction",
    "メンバー紹介",
    "バンド紹介",
    "アンコール待ち",
];

/// Patterns that mark a line as a non-song entry when any of them matches.
///
/// `stage talk` and `member introduction` are unanchored so that
/// "Stage Talk 2" and similar still classify.
pub const NON_SONG_PATTERNS: &[&str] = &[
    r"(?i)^mc[0-9]*$",
    r"(?i)^m\.c\.$",
    r"(?i)stage\s*talk",
    r"(?i)^talk$",
    r"(?i)^mcコーナー$",
    r"^トーク$",
    r"(?i)^interlude$",
    r"(?i)^instrumental$",
    r"(?i)^intro$",
    r"(?i)^outro$",
    r"(?i)^opening$",
    r"(?i)^ending$",
    r"(?i)^se$",
    r"(?i)^vtr$",
    r"(?i)member\s*introduction",
    r"^メンバー紹介$",
    r"^バンド紹介$",
    r"^アンコール待ち$",
];

/// Tag texts that mark an encore after canonicalization and lowercasing.
pub const ENCORE_TOKENS: &[&str] = &["encore", "アンコール"];

/// Substitutions applied after NFKC for characters it leaves alone.
pub const EXTRA_SUBSTITUTIONS: &[(char, char)] = &[
    ('〜', '~'),
    ('～', '~'),
    ('’', '\''),
    ('‘', '\''),
    ('＇', '\''),
    ('”', '"'),
    ('“', '"'),
    ('＆', '&'),
    ('＃', '#'),
    ('！', '!'),
    ('？', '?'),
    ('\u{3000}', ' '),
];

/// Bullet glyphs accepted as a leading token.
pub const BULLET_GLYPHS: &[char] = &['★', '☆', '◎', '○', '●', '•', '・', '-', '–', '—'];

/// Separator placed between the parts of a delimited title.
pub const CANONICAL_DELIMITER: &str = " / ";

/// Name of the first encore section; later ones carry their ordinal.
pub const ENCORE_SECTION_NAME: &str = "Encore";

/// Matches an encore marker, optionally wrapped in `[]` or angle brackets.
pub fn encore_pattern() -> &'static Regex {
    static ENCORE: OnceLock<Regex> = OnceLock::new();
    ENCORE.get_or_init(|| {
        Regex::new(r"(?i)^(?:\[|<|＜)?\s*(?:encore|アンコール)\s*(?:\]|>|＞)?$")
            .expect("Invalid encore regex")
    })
}

/// All non-song patterns compiled into one set.
pub fn non_song_patterns() -> &'static RegexSet {
    static NON_SONG: OnceLock<RegexSet> = OnceLock::new();
    NON_SONG.get_or_init(|| RegexSet::new(NON_SONG_PATTERNS).expect("Invalid non-song regex"))
}

/// Matches one ordinal or bullet marker at the start of a line, plus the
/// whitespace around it.
///
/// Bare numbers must be followed by a separator or whitespace, so "1999"
/// and "10cc" survive. Roman numerals run from I to XXXIX and use only
/// `I`, `V` and `X`, so words like "Mix:", "MC" or "Dance" are never read
/// as numerals. A numeral followed by a separator may be upper or lower
/// case; one followed only by whitespace must be upper case and at least
/// two letters long, which keeps the "I" of "I Love You".
pub fn leading_token_pattern() -> &'static Regex {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    LEADING.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*(?:",
            r"[0-9]{1,3}[.．、:)]",
            r"|[0-9]{1,3}(?:\s|$)",
            r"|[(（][0-9]{1,2}[)）]",
            r"|(?:X{0,3}(?:IX|IV|VI{0,3}|I{1,3})|X{1,3})[.．、:)](?:\s|$)",
            r"|(?:x{0,3}(?:ix|iv|vi{0,3}|i{1,3})|x{1,3})[.．、:)](?:\s|$)",
            r"|(?:X{1,3}(?:IX|IV|VI{0,3}|I{1,3})|X{2,3}|IX|IV|VI{1,3}|I{2,3})\s",
            r"|[★☆◎○●•・\-–—]",
            r"|第[0-9]+部",
            r")\s*",
        ))
        .expect("Invalid leading token regex")
    })
}

/// Matches one bracketed tag. Exactly one capture group participates per
/// match, holding the inner text.
///
/// The full-width angle style also accepts `<…>`, which is what NFKC turns
/// `＜…＞` into before tags are scanned.
pub fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"\(([^)]+)\)|\[([^\]]+)\]|[<＜]([^>＞]+)[>＞]|〈([^〉]+)〉")
            .expect("Invalid tag regex")
    })
}

/// Matches a slash-style delimiter with its surrounding whitespace.
pub fn delimiter_pattern() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r"\s*[/／]\s*").expect("Invalid delimiter regex"))
}
