//! Timestamp line detection and field extraction.
//!
//! A message line in a text export looks like:
//!
//! ```text
//! [optional '['] D/M/Y, H:M [optional ']'] - [Author:] message text
//! ```
//!
//! Detection is deliberately loose: the timestamp may appear anywhere in
//! the line. Extraction then splits on the first separator of each kind.

use log::debug;
use regex::Regex;

use crate::config::TranscriptConfig;
use crate::error::{ChatmoodError, Result};

/// Fields extracted from a single timestamp line, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDatapoint {
    /// Date text with bracket characters removed, e.g. `1/1/23`.
    pub date: String,
    /// Time text, e.g. `10:00` or `9:15 PM`.
    pub time: String,
    /// Author name; `None` for system messages.
    pub author: Option<String>,
    /// First line of the message body.
    pub message: String,
}

/// Compiled line patterns built from a [`TranscriptConfig`].
///
/// # Example
///
/// ```rust
/// use chatmood::config::TranscriptConfig;
/// use chatmood::parsing::LinePatterns;
///
/// let patterns = LinePatterns::new(&TranscriptConfig::default())?;
/// assert!(patterns.is_timestamp_line("1/1/23, 10:00 - Alice: Hi"));
///
/// let point = patterns.extract("1/1/23, 10:00 - Alice: Hi")?;
/// assert_eq!(point.author.as_deref(), Some("Alice"));
/// assert_eq!(point.message, "Hi");
/// # Ok::<(), chatmood::ChatmoodError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinePatterns {
    timestamp: Regex,
    message_separator: char,
    datetime_separator: String,
    author_separator: char,
    bracket_chars: Vec<char>,
}

impl LinePatterns {
    /// Compiles the patterns in `config`.
    pub fn new(config: &TranscriptConfig) -> Result<Self> {
        let timestamp = Regex::new(&config.timestamp_pattern)
            .map_err(|e| ChatmoodError::invalid_pattern(&config.timestamp_pattern, e))?;

        Ok(Self {
            timestamp,
            message_separator: config.message_separator,
            datetime_separator: config.datetime_separator.clone(),
            author_separator: config.author_separator,
            bracket_chars: config.bracket_chars.clone(),
        })
    }

    /// Returns `true` if the line opens a new message.
    pub fn is_timestamp_line(&self, line: &str) -> bool {
        self.timestamp.is_match(line)
    }

    /// Splits a timestamp line into date, time, author and message.
    ///
    /// Fails with [`ChatmoodError::MalformedTimestamp`] when the prefix has
    /// no date/time separator. A lone line has no position, so the error
    /// carries no line number; the assembler reports the real one.
    pub fn extract(&self, line: &str) -> Result<RawDatapoint> {
        self.try_extract(line)
            .ok_or_else(|| ChatmoodError::malformed_timestamp(None, line.trim()))
    }

    pub(crate) fn try_extract(&self, line: &str) -> Option<RawDatapoint> {
        let (prefix, suffix) = match line.split_once(self.message_separator) {
            Some(parts) => parts,
            None => {
                debug!(
                    "No '{}' after timestamp, author and body left empty: '{}'",
                    self.message_separator,
                    line.trim()
                );
                (line, "")
            }
        };

        let (date, time) = prefix.split_once(self.datetime_separator.as_str())?;

        let date: String = date
            .chars()
            .filter(|c| !self.bracket_chars.contains(c))
            .collect();
        let time = time.trim();
        let time = time.strip_suffix(']').unwrap_or(time).trim_end();

        let (author, message) = match suffix.split_once(self.author_separator) {
            Some((author, body)) => {
                let author = author.trim();
                let author = (!author.is_empty()).then(|| author.to_string());
                (author, body.trim())
            }
            None => (None, suffix.trim()),
        };

        Some(RawDatapoint {
            date: date.trim().to_string(),
            time: time.to_string(),
            author,
            message: message.to_string(),
        })
    }
}
