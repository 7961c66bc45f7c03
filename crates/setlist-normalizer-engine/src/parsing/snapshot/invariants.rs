use crate::parsing::{
    blocks::{ParseResult, SetlistBlock},
    lines::count_lines,
};

/// Validates parser output invariants for `result` parsed from `input`.
///
/// Asserts that:
/// - `total_lines` equals the number of lines in `input`
/// - Every line is accounted for exactly once: tracks + encores + skipped
/// - Track and skipped line numbers are strictly increasing
/// - Emitted sections are either absent or exactly `Encore`, `Encore 2`, ...
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, result: &ParseResult) {
    let meta = &result.metadata;

    let lines = count_lines(input);
    assert_eq!(
        meta.total_lines, lines,
        "total_lines {} does not match split count {}",
        meta.total_lines, lines
    );

    let tracks = result.tracks().count();
    assert_eq!(
        meta.total_lines,
        tracks + meta.encore_count + meta.skipped_lines.len(),
        "line accounting broken: {} tracks + {} encores + {} skipped != {} lines",
        tracks,
        meta.encore_count,
        meta.skipped_lines.len(),
        meta.total_lines
    );

    assert_increasing(result.tracks().map(|t| t.raw.line_number), "track");
    assert_increasing(meta.skipped_lines.iter().map(|r| r.line_number), "skipped");

    let sections: Vec<&str> = result.sections().collect();
    if !sections.is_empty() {
        assert_eq!(
            sections.len(),
            meta.encore_count,
            "{} sections emitted for {} encore markers",
            sections.len(),
            meta.encore_count
        );
        for (i, name) in sections.iter().enumerate() {
            let expected = SetlistBlock::encore(i + 1);
            assert_eq!(
                Some(*name),
                expected.as_section(),
                "section {} misnamed",
                i + 1
            );
        }
    }
}

fn assert_increasing(numbers: impl Iterator<Item = usize>, what: &str) {
    let mut prev = 0usize;
    for n in numbers {
        assert!(n > prev, "{what} line numbers out of order: {n} after {prev}");
        prev = n;
    }
}
