//! Edge case tests for chatmood
//!
//! Export variants, odd line shapes and Unicode that the happy-path
//! integration tests do not reach.

use chatmood::config::TranscriptConfig;
use chatmood::core::features::extract_emoji;
use chatmood::core::filter::remove_standard_messages;
use chatmood::parser::TranscriptParser;
use chatmood::parsing::{normalize_date, normalize_time};
use chatmood::{MessageRecord, Transcript};
use chrono::{NaiveDate, NaiveTime};

fn parse(content: &str) -> Transcript {
    TranscriptParser::new().parse_str(content).unwrap()
}

fn date_formats() -> Vec<String> {
    TranscriptConfig::default().date_formats
}

fn time_formats() -> Vec<String> {
    TranscriptConfig::default().time_formats
}

// =========================================================================
// Line shapes
// =========================================================================

#[test]
fn test_hyphens_in_body_are_preserved() {
    let t = parse("header\n1/1/23, 10:00 - Alice: well-known re-run - twice");
    assert_eq!(t[0].message, "well-known re-run - twice");
}

#[test]
fn test_colons_in_body_are_preserved() {
    let t = parse("header\n1/1/23, 10:00 - Alice: meet at 10:30: bring snacks");
    assert_eq!(t[0].author.as_deref(), Some("Alice"));
    assert_eq!(t[0].message, "meet at 10:30: bring snacks");
}

#[test]
fn test_bracketed_timestamp_variant() {
    let t = parse("header\n[1/2/23, 10:00:15] - Bob: hi");
    assert_eq!(t[0].date, NaiveDate::from_ymd_opt(2023, 2, 1));
    assert_eq!(t[0].time, NaiveTime::from_hms_opt(10, 0, 15));
    assert_eq!(t[0].author.as_deref(), Some("Bob"));
}

#[test]
fn test_timestamp_inside_continuation_starts_new_record() {
    // Not anchored to line start: a quoted timestamp opens a record.
    let t = parse("header\n1/1/23, 10:00 - Alice: hi\n> quoted 1/1/23, 09:00 - Bob: old");
    assert_eq!(t.len(), 2);
    assert_eq!(t[1].author.as_deref(), Some("Bob"));
}

#[test]
fn test_empty_body_after_author() {
    let t = parse("header\n1/1/23, 10:00 - Alice:\n1/1/23, 10:01 - Bob: x");
    assert_eq!(t[0].message, "");
    assert_eq!(t[0].message_length, 0);
    assert_eq!(t[0].author.as_deref(), Some("Alice"));
}

#[test]
fn test_blank_author_is_system() {
    let t = parse("header\n1/1/23, 10:00 - : orphaned colon");
    assert!(t[0].is_system());
    assert_eq!(t[0].message, "orphaned colon");
}

#[test]
fn test_crlf_line_endings() {
    let t = parse("header\r\n1/1/23, 10:00 - Alice: one\r\ntwo\r\n1/1/23, 10:01 - Bob: three\r\n");
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].message, "one two");
    assert_eq!(t[1].message, "three");
}

#[test]
fn test_trailing_blank_lines_stay_in_last_body() {
    let t = parse("header\n1/1/23, 10:00 - Alice: end\n\n");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].message, "end ");
}

#[test]
fn test_no_header_skip() {
    let parser =
        TranscriptParser::with_config(TranscriptConfig::new().with_skip_header_lines(0)).unwrap();
    let t = parser.parse_str("1/1/23, 10:00 - Alice: first").unwrap();
    assert_eq!(t.len(), 1);
}

#[test]
fn test_custom_timestamp_pattern() {
    let config = TranscriptConfig::new()
        .with_timestamp_pattern(r"\d{4}/\d{2}/\d{2}, \d{2}:\d{2}")
        .with_date_formats(vec!["%Y/%m/%d".to_string()]);
    let parser = TranscriptParser::with_config(config).unwrap();
    let t = parser
        .parse_str("header\n2023/05/07, 08:00 - Ann: hey\n1/1/23, 10:00 ignored as text")
        .unwrap();

    assert_eq!(t.len(), 1);
    assert_eq!(t[0].date, NaiveDate::from_ymd_opt(2023, 5, 7));
    assert_eq!(t[0].message, "hey 1/1/23, 10:00 ignored as text");
}

#[test]
fn test_invalid_timestamp_pattern() {
    let config = TranscriptConfig::new().with_timestamp_pattern("([0-9]+");
    let result = TranscriptParser::with_config(config);
    assert!(matches!(
        result,
        Err(chatmood::ChatmoodError::InvalidPattern { .. })
    ));
}

// =========================================================================
// Date and time normalization
// =========================================================================

#[test]
fn test_invalid_day_month_is_null() {
    assert_eq!(normalize_date("32/13/2023", &date_formats()), None);
    let t = parse("header\n32/13/2023, 10:00 - Alice: hi");
    assert_eq!(t.len(), 1);
    assert!(t[0].date.is_none());
    assert_eq!(t[0].time, NaiveTime::from_hms_opt(10, 0, 0));
}

#[test]
fn test_day_first_ordering() {
    assert_eq!(
        normalize_date("03/04/2023", &date_formats()),
        NaiveDate::from_ymd_opt(2023, 4, 3)
    );
    assert_eq!(
        normalize_date("3/4/23", &date_formats()),
        NaiveDate::from_ymd_opt(2023, 4, 3)
    );
}

#[test]
fn test_twelve_hour_times() {
    let formats = time_formats();
    assert_eq!(
        normalize_time("12:05 am", &formats),
        NaiveTime::from_hms_opt(0, 5, 0)
    );
    assert_eq!(
        normalize_time("1:15\u{202f}PM", &formats),
        NaiveTime::from_hms_opt(13, 15, 0)
    );
}

#[test]
fn test_out_of_range_time_is_null() {
    assert_eq!(normalize_time("25:61", &time_formats()), None);
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_length_counts_code_points() {
    let record = MessageRecord::new("Привет 👋");
    assert_eq!(record.message_length, 8);
    assert_eq!(record.emoji, vec!["👋"]);
}

#[test]
fn test_flags_and_skin_tones_stay_whole() {
    assert_eq!(extract_emoji("🇯🇵"), vec!["🇯🇵"]);
    assert_eq!(extract_emoji("👋🏿👋"), vec!["👋🏿", "👋"]);
}

#[test]
fn test_cjk_and_arabic_have_no_emoji() {
    assert!(extract_emoji("こんにちは世界 مرحبا بالعالم").is_empty());
}

#[test]
fn test_emoji_only_message() {
    let t = parse("header\n1/1/23, 10:00 - Alice: 😂😂😂");
    assert_eq!(t[0].emoji.len(), 3);
    assert_eq!(t[0].message_length, 3);
}

// =========================================================================
// Noise filter
// =========================================================================

#[test]
fn test_noise_filter_on_empty_transcript() {
    let (filtered, report) = remove_standard_messages(&Transcript::default()).unwrap();
    assert!(filtered.is_empty());
    assert_eq!(report.input_count, 0);
    assert_eq!(report.total_matches(), 0);
}

#[test]
fn test_broad_substring_semantics() {
    let t = Transcript::new(vec![
        MessageRecord::new("X added Y"),
        MessageRecord::new("I have added comments"),
        MessageRecord::new("reattached the file"),
        MessageRecord::new("Nothing to see"),
    ]);
    let (filtered, _) = remove_standard_messages(&t).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].message, "Nothing to see");
}

#[test]
fn test_left_without_digits_survives() {
    let t = Transcript::new(vec![
        MessageRecord::new("Bob left"),
        MessageRecord::new("only 3 left in stock"),
    ]);
    let (filtered, _) = remove_standard_messages(&t).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].message, "Bob left");
}
