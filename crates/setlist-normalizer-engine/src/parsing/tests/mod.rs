//! End-to-end tests for `parse_setlist`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{ParseResult, SetlistBlock},
    lines::RawLine,
    options::{ParseOptions, PartialParseOptions},
    parse_setlist, snapshot,
};

const BASE_INPUT: &str =
    "01. Song A (Acoustic)\nStage Talk\nEncore\n03. Song C (Live)\nSong D / Song E [Duet]";

fn parse(input: &str, options: impl Into<ParseOptions>) -> ParseResult {
    let result = parse_setlist(input, options);
    snapshot::invariants(input, &result);
    result
}

fn titles(result: &ParseResult) -> Vec<&str> {
    result.tracks().map(|t| t.title.as_str()).collect()
}

#[test]
fn default_options_split_encores_and_drop_talk() {
    let result = parse(BASE_INPUT, ParseOptions::default());

    let summary: Vec<(Option<&str>, Option<&str>, Vec<String>)> = result
        .blocks
        .iter()
        .map(|b| {
            (
                b.as_track().map(|t| t.title.as_str()),
                b.as_section(),
                b.as_track().map(|t| t.tags.clone()).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some("Song A"), None, vec!["Acoustic".to_string()]),
            (None, Some("Encore"), vec![]),
            (Some("Song C"), None, vec!["Live".to_string()]),
            (Some("Song D / Song E"), None, vec!["Duet".to_string()]),
        ]
    );

    let raws: Vec<&RawLine> = result.tracks().map(|t| &t.raw).collect();
    assert_eq!(
        raws,
        vec![
            &RawLine::new("01. Song A (Acoustic)", 1),
            &RawLine::new("03. Song C (Live)", 4),
            &RawLine::new("Song D / Song E [Duet]", 5),
        ]
    );
    assert!(result.tracks().all(|t| !t.is_encore_marker && !t.is_non_song));

    assert_eq!(result.metadata.encore_count, 1);
    assert_eq!(result.metadata.total_lines, 5);
    assert_eq!(result.metadata.skipped_lines, vec![RawLine::new("Stage Talk", 2)]);
}

#[test]
fn keeps_non_songs_and_hides_encores_on_request() {
    let options = PartialParseOptions {
        exclude_non_songs: Some(false),
        keep_encore_markers: Some(false),
        ..Default::default()
    };
    let result = parse(BASE_INPUT, options);

    assert_eq!(result.sections().count(), 0);
    assert_eq!(
        titles(&result),
        vec!["Song A", "Stage Talk", "Song C", "Song D / Song E"]
    );

    let talk = result.tracks().nth(1).expect("stage talk track");
    assert!(talk.is_non_song);
    assert_eq!(talk.raw, RawLine::new("Stage Talk", 2));

    assert_eq!(result.metadata.encore_count, 1);
    assert_eq!(result.metadata.total_lines, 5);
    assert!(result.metadata.skipped_lines.is_empty());
}

#[test]
fn numbers_repeated_encores() {
    let result = parse("Encore\nEncore\nSong A\nEncore\nSong B", ParseOptions::default());

    let order: Vec<String> = result
        .blocks
        .iter()
        .map(|b| match b {
            SetlistBlock::Track { track } => format!("track:{}", track.title),
            SetlistBlock::Section { name } => format!("section:{name}"),
        })
        .collect();
    assert_eq!(
        order,
        vec![
            "section:Encore",
            "section:Encore 2",
            "track:Song A",
            "section:Encore 3",
            "track:Song B",
        ]
    );
    assert_eq!(result.metadata.encore_count, 3);
    assert_eq!(result.metadata.total_lines, 5);
    assert!(result.metadata.skipped_lines.is_empty());
}

#[test]
fn bracket_only_line_is_kept() {
    let result = parse("[Acoustic Version]\nSong A", ParseOptions::default());

    let first = result.tracks().next().expect("tag-only track");
    assert_eq!(first.title, "");
    assert_eq!(first.tags, vec!["Acoustic Version"]);
    assert_eq!(first.raw, RawLine::new("[Acoustic Version]", 1));
    assert_eq!(titles(&result), vec!["", "Song A"]);
    assert!(result.metadata.skipped_lines.is_empty());
}

#[test]
fn blank_and_talk_lines_are_recorded_as_skipped() {
    let result = parse("\n   \nSong A\nStage Talk\nSong B", ParseOptions::default());

    assert_eq!(titles(&result), vec!["Song A", "Song B"]);
    assert_eq!(
        result.metadata.skipped_lines,
        vec![
            RawLine::new("", 1),
            RawLine::new("   ", 2),
            RawLine::new("Stage Talk", 4),
        ]
    );
    assert_eq!(result.metadata.total_lines, 5);
}

#[rstest]
#[case(ParseOptions::default())]
#[case(ParseOptions { exclude_non_songs: false, keep_encore_markers: false, ignore_case: false })]
#[case(ParseOptions { exclude_non_songs: false, ..ParseOptions::default() })]
fn blank_lines_are_skipped_under_any_options(#[case] options: ParseOptions) {
    let result = parse(" \n\u{3000}\n\t", options);
    assert!(result.blocks.is_empty());
    assert_eq!(result.metadata.skipped_lines.len(), 3);
}

#[test]
fn empty_input_yields_empty_result() {
    let result = parse("", ParseOptions::default());
    assert_eq!(result, ParseResult::default());
}

#[test]
fn mixed_line_endings() {
    let result = parse("Song A\r\nSong B\rSong C\nSong D", ParseOptions::default());
    assert_eq!(titles(&result), vec!["Song A", "Song B", "Song C", "Song D"]);
    let numbers: Vec<usize> = result.tracks().map(|t| t.raw.line_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn encore_beats_non_song_and_emptiness() {
    // Title is empty and the only tag is an encore token.
    let result = parse("[Encore]\n＜アンコール＞", ParseOptions::default());
    assert_eq!(result.sections().collect::<Vec<_>>(), vec!["Encore", "Encore 2"]);
    assert!(result.metadata.skipped_lines.is_empty());
}

#[test]
fn tag_only_non_song_is_excluded() {
    let result = parse("(MC)\nSong A", ParseOptions::default());
    assert_eq!(titles(&result), vec!["Song A"]);
    assert_eq!(result.metadata.skipped_lines, vec![RawLine::new("(MC)", 1)]);
}

#[test]
fn case_sensitive_keywords_still_hit_patterns() {
    let options = ParseOptions {
        ignore_case: false,
        ..ParseOptions::default()
    };
    // `MC` misses the lowercase keyword but matches `^mc[0-9]*$` case-insensitively.
    let result = parse("MC\nSong A", options);
    assert_eq!(titles(&result), vec!["Song A"]);
}

#[test]
fn japanese_setlist() {
    let input = "第1部\n1. 夜明けのうた\n２．星の唄（弾き語り）\nＭＣ\nメンバー紹介\nアンコール\nEN1. 夜明けのうた／星の唄";
    let result = parse(input, ParseOptions::default());

    assert_eq!(
        titles(&result),
        vec!["夜明けのうた", "星の唄", "EN1. 夜明けのうた / 星の唄"]
    );
    assert_eq!(result.tracks().nth(1).map(|t| t.tags.clone()), Some(vec!["弾き語り".to_string()]));
    assert_eq!(result.sections().collect::<Vec<_>>(), vec!["Encore"]);
    let skipped: Vec<usize> = result
        .metadata
        .skipped_lines
        .iter()
        .map(|r| r.line_number)
        .collect();
    assert_eq!(skipped, vec![1, 4, 5]);
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("Encore\n\nMC\n[Live]\n()\n1\nSong")]
#[case("a\r\nb\r\n\r\n")]
#[case("アンコール\nアンコール\n〈Encore〉")]
fn accounting_holds_for_all_option_combinations(#[case] input: &str) {
    for exclude_non_songs in [true, false] {
        for keep_encore_markers in [true, false] {
            for ignore_case in [true, false] {
                let options = ParseOptions {
                    exclude_non_songs,
                    keep_encore_markers,
                    ignore_case,
                };
                parse(input, options);
            }
        }
    }
}

#[test]
fn json_matches_the_wire_format() {
    let result = parse("01. Song A (Acoustic)\nEncore", ParseOptions::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "blocks": [
                {
                    "type": "track",
                    "track": {
                        "title": "Song A",
                        "tags": ["Acoustic"],
                        "isEncoreMarker": false,
                        "isNonSong": false,
                        "raw": {"original": "01. Song A (Acoustic)", "lineNumber": 1}
                    }
                },
                {"type": "section", "name": "Encore"}
            ],
            "metadata": {"encoreCount": 1, "totalLines": 2, "skippedLines": []}
        })
    );
}

#[test]
fn concurrent_parses_match_sequential_ones() {
    let inputs = [
        BASE_INPUT,
        "Opening\nI. Prelude\nII Storm (Live)\nEncore\n[Acoustic Version]\nEncore\nSong B / Song C",
        "①　Ｏｖｅｒｔｕｒｅ\nＭＣ\n＜アンコール＞\nＥＮ１．Ｌｉｇｈｔ／Ｓｈａｄｏｗ",
        "\r\n\r\n★Song (MC)\r\nMix: Song A/Song B\r\n",
    ];
    let options = [
        ParseOptions::default(),
        ParseOptions {
            exclude_non_songs: false,
            keep_encore_markers: false,
            ignore_case: false,
        },
    ];

    let expected: Vec<ParseResult> = inputs
        .iter()
        .flat_map(|input| options.iter().map(|o| parse_setlist(input, *o)))
        .collect();

    for _ in 0..4 {
        let actual: Vec<ParseResult> = std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .flat_map(|input| {
                    options
                        .iter()
                        .map(move |o| s.spawn(move || parse_setlist(input, *o)))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(actual, expected);
    }
}
