//! Message records and the transcript table.
//!
//! A [`MessageRecord`] is one reconstructed message: the fields pulled from
//! its timestamp line, the full (possibly multi-line) body, and features
//! derived from that body. A [`Transcript`] is the ordered table of records
//! for one export, in the order they appear in the file.
//!
//! # Examples
//!
//! ```
//! use chatmood::{MessageRecord, Transcript};
//! use chrono::NaiveDate;
//!
//! let record = MessageRecord::new("Hello 😀")
//!     .with_author("Alice")
//!     .with_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
//!
//! assert_eq!(record.emoji, vec!["😀"]);
//! assert_eq!(record.message_length, 7);
//!
//! let transcript: Transcript = vec![record].into_iter().collect();
//! assert_eq!(transcript.len(), 1);
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::features::{extract_emoji, message_length};
use crate::sentiment::SentimentResult;

/// One reconstructed chat message with derived features.
///
/// Serialized field names follow the output table columns:
/// `Date`, `Time`, `Author`, `Message`, `emoji`, `Message_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Calendar date, `None` when the date text could not be parsed.
    #[serde(rename = "Date")]
    pub date: Option<NaiveDate>,

    /// Time of day, `None` when the time text could not be parsed.
    #[serde(rename = "Time")]
    pub time: Option<NaiveTime>,

    /// Sender name; `None` marks a system message with no human sender.
    #[serde(rename = "Author")]
    pub author: Option<String>,

    /// Message body, continuation lines joined with single spaces.
    #[serde(rename = "Message")]
    pub message: String,

    /// Emoji grapheme clusters in order of appearance, duplicates kept.
    #[serde(default)]
    pub emoji: Vec<String>,

    /// Number of characters (not bytes) in `message`.
    #[serde(rename = "Message_length")]
    pub message_length: usize,

    /// Sentiment attached by a classifier, if one was run.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
}

impl MessageRecord {
    /// Creates a record from a message body, deriving emoji and length.
    ///
    /// Date, time, author and sentiment start as `None`.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            date: None,
            time: None,
            author: None,
            emoji: extract_emoji(&message),
            message_length: message_length(&message),
            message,
            sentiment: None,
        }
    }

    /// Sets the date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the time of day.
    #[must_use]
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Attaches a sentiment result.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: SentimentResult) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Returns `true` if the record has no author.
    pub fn is_system(&self) -> bool {
        self.author.is_none()
    }

    /// Returns `true` if the body contains at least one emoji.
    pub fn has_emoji(&self) -> bool {
        !self.emoji.is_empty()
    }
}

/// Ordered table of message records for one export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<MessageRecord>,
}

impl Transcript {
    /// Creates a transcript from records in file order.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Borrows the records as a slice.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [MessageRecord] {
        &mut self.records
    }

    /// Consumes the transcript, returning its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Distinct authors in order of first appearance.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for author in self.records.iter().filter_map(|r| r.author.as_deref()) {
            if !seen.contains(&author) {
                seen.push(author);
            }
        }
        seen
    }

    /// Returns `true` if any record carries a sentiment result.
    pub fn has_sentiment(&self) -> bool {
        self.records.iter().any(|r| r.sentiment.is_some())
    }
}

impl FromIterator<MessageRecord> for Transcript {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Transcript {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::ops::Index<usize> for Transcript {
    type Output = MessageRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
