//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::message::{MessageRecord, Transcript};
use crate::sentiment::SentimentLabel;

const BASE_HEADER: [&str; 6] = ["Date", "Time", "Author", "Message", "emoji", "Message_length"];
const SENTIMENT_HEADER: [&str; 2] = ["Sentiment", "Score"];

/// Writes a transcript to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Author`, `Message`, `emoji`, `Message_length`,
///   followed by `Sentiment`, `Score` when any record carries sentiment,
///   and one score column per label (`positive`, `neutral`, `negative`)
///   when any record carries a full distribution
/// - Dates as `%Y-%m-%d`, times as `%H:%M:%S`
/// - Emoji joined with single spaces
/// - Missing values are empty fields
/// - Encoding: UTF-8
pub fn write_csv(transcript: &Transcript, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(transcript, file)
}

/// Converts a transcript to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String`.
pub fn to_csv(transcript: &Transcript) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(transcript, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[derive(Clone, Copy)]
struct Columns {
    sentiment: bool,
    distribution: bool,
}

impl Columns {
    fn for_transcript(transcript: &Transcript) -> Self {
        let distribution = transcript
            .iter()
            .filter_map(|r| r.sentiment.as_ref())
            .any(|s| !s.scores.is_empty());
        Self {
            sentiment: distribution || transcript.has_sentiment(),
            distribution,
        }
    }
}

fn write_records<W: Write>(transcript: &Transcript, sink: W) -> Result<()> {
    let columns = Columns::for_transcript(transcript);
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    let mut header: Vec<&str> = BASE_HEADER.to_vec();
    if columns.sentiment {
        header.extend(SENTIMENT_HEADER);
    }
    if columns.distribution {
        header.extend(SentimentLabel::all().iter().map(|l| l.as_str()));
    }
    writer.write_record(&header)?;

    for record in transcript {
        writer.write_record(build_record(record, columns))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(record: &MessageRecord, columns: Columns) -> Vec<String> {
    let mut row = vec![
        record
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        record
            .time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
        record.author.clone().unwrap_or_default(),
        record.message.clone(),
        record.emoji.join(" "),
        record.message_length.to_string(),
    ];

    if columns.sentiment {
        match &record.sentiment {
            Some(s) => {
                row.push(s.label.to_string());
                row.push(format!("{:.4}", s.score));
            }
            None => {
                row.push(String::new());
                row.push(String::new());
            }
        }
    }

    if columns.distribution {
        // Top-1 results leave the per-label columns empty.
        let scores = record.sentiment.as_ref().filter(|s| !s.scores.is_empty());
        for &label in SentimentLabel::all() {
            row.push(
                scores
                    .and_then(|s| s.score_for(label))
                    .map(|v| format!("{:.4}", v))
                    .unwrap_or_default(),
            );
        }
    }

    row
}
