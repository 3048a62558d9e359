//! Per-message derived features.
//!
//! Turns an assembled [`RawRecord`] into a [`MessageRecord`]: the date and
//! time strings are normalized, and the body is scanned for emoji and
//! measured.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::TranscriptConfig;
use crate::message::MessageRecord;
use crate::parser::RawRecord;
use crate::parsing::{normalize_date, normalize_time};

/// Returns the emoji grapheme clusters in `text`, in order.
///
/// Text is segmented into extended grapheme clusters so multi-codepoint
/// sequences (skin tones, ZWJ families, flags) stay whole. A cluster counts
/// as emoji when it is a known emoji sequence or any of its code points is
/// an emoji on its own.
///
/// # Example
///
/// ```rust
/// use chatmood::core::features::extract_emoji;
///
/// assert!(extract_emoji("plain text").is_empty());
/// assert_eq!(extract_emoji("hi 👨‍👩‍👧 and 😀😀"), vec!["👨‍👩‍👧", "😀", "😀"]);
/// ```
pub fn extract_emoji(text: &str) -> Vec<String> {
    text.graphemes(true)
        .filter(|cluster| is_emoji_cluster(cluster))
        .map(str::to_string)
        .collect()
}

/// Returns `true` if `cluster` is a known emoji sequence or any of its code
/// points is a known emoji.
pub fn is_emoji_cluster(cluster: &str) -> bool {
    emojis::get(cluster).is_some() || cluster.chars().any(is_emoji_char)
}

// Text-default symbols such as U+2600 are listed with a trailing VS16.
fn is_emoji_char(c: char) -> bool {
    let mut text = String::with_capacity(8);
    text.push(c);
    if emojis::get(&text).is_some() {
        return true;
    }
    text.push('\u{fe0f}');
    emojis::get(&text).is_some()
}

/// Character count of a message body.
pub fn message_length(text: &str) -> usize {
    text.chars().count()
}

/// Normalizes an assembled record and derives its features.
///
/// Unparseable dates and times become `None`.
pub fn annotate(raw: RawRecord, config: &TranscriptConfig) -> MessageRecord {
    let date = raw
        .date
        .as_deref()
        .and_then(|d| normalize_date(d, &config.date_formats));
    let time = raw
        .time
        .as_deref()
        .and_then(|t| normalize_time(t, &config.time_formats));

    MessageRecord {
        date,
        time,
        author: raw.author,
        ..MessageRecord::new(raw.message)
    }
}
