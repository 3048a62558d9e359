//! Transcript assembly.
//!
//! A text export is line-oriented but messages are not: a message starts on
//! a timestamp line and runs until the next one. [`TranscriptParser`] folds
//! the lines back into messages, one pass, holding the message being built
//! in a buffer until the next timestamp line (or end of input) closes it.
//!
//! # Example
//!
//! ```rust
//! use chatmood::parser::TranscriptParser;
//!
//! let export = "\
//! Messages and calls are end-to-end encrypted.
//! 1/1/23, 10:00 - Alice: Hello there 😀
//! continuation text
//! 2/1/23, 11:05 - Bob: Bye";
//!
//! let transcript = TranscriptParser::new().parse_str(export)?;
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript[0].message, "Hello there 😀 continuation text");
//! assert_eq!(transcript[1].author.as_deref(), Some("Bob"));
//! # Ok::<(), chatmood::ChatmoodError>(())
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::TranscriptConfig;
use crate::core::features::annotate;
use crate::error::{ChatmoodError, Result};
use crate::message::Transcript;
use crate::parsing::LinePatterns;

/// A message as assembled from the export, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Date text; `None` for text that preceded the first timestamp line.
    pub date: Option<String>,
    /// Time text; `None` for text that preceded the first timestamp line.
    pub time: Option<String>,
    /// Author; `None` for system messages.
    pub author: Option<String>,
    /// Buffered lines joined with single spaces.
    pub message: String,
}

/// Parser for line-oriented chat exports.
pub struct TranscriptParser {
    config: TranscriptConfig,
    patterns: LinePatterns,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        let config = TranscriptConfig::default();
        let patterns =
            LinePatterns::new(&config).expect("default timestamp pattern is a valid regex");
        Self { config, patterns }
    }

    /// Creates a parser with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatmoodError::InvalidPattern`] if the timestamp pattern
    /// does not compile.
    pub fn with_config(config: TranscriptConfig) -> Result<Self> {
        let patterns = LinePatterns::new(&config)?;
        Ok(Self { config, patterns })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Returns the compiled line patterns.
    pub fn patterns(&self) -> &LinePatterns {
        &self.patterns
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Transcript> {
        let raw = self.assemble(content.lines())?;
        Ok(raw
            .into_iter()
            .map(|r| annotate(r, &self.config))
            .collect())
    }

    /// Folds lines into raw records without normalizing them.
    ///
    /// The first `skip_header_lines` lines are discarded. Every remaining
    /// line lands in exactly one record's body.
    pub fn assemble<'a, I>(&self, lines: I) -> Result<Vec<RawRecord>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = Vec::new();
        let mut buffer: Vec<String> = Vec::new();
        let mut date: Option<String> = None;
        let mut time: Option<String> = None;
        let mut author: Option<String> = None;

        let skip = self.config.skip_header_lines;
        for (index, line) in lines.into_iter().enumerate().skip(skip) {
            let line = line.trim();

            if !self.patterns.is_timestamp_line(line) {
                buffer.push(line.to_string());
                continue;
            }

            let Some(point) = self.patterns.try_extract(line) else {
                if self.config.skip_invalid {
                    warn!("Line {}: malformed timestamp, kept as text", index + 1);
                    buffer.push(line.to_string());
                    continue;
                }
                return Err(ChatmoodError::malformed_timestamp(Some(index + 1), line));
            };

            if !buffer.is_empty() {
                records.push(RawRecord {
                    date: date.take(),
                    time: time.take(),
                    author: author.take(),
                    message: buffer.join(" "),
                });
            }
            buffer.clear();

            date = Some(point.date);
            time = Some(point.time);
            author = point.author;
            buffer.push(point.message);
        }

        if !buffer.is_empty() {
            if self.config.flush_trailing {
                records.push(RawRecord {
                    date,
                    time,
                    author,
                    message: buffer.join(" "),
                });
            } else {
                debug!("Dropping unflushed trailing message ({} lines)", buffer.len());
            }
        }

        debug!("Assembled {} records", records.len());
        Ok(records)
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
