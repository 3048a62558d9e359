//! Remove system and filler messages from a transcript.
//!
//! Group exports are full of generated notices: people joining through an
//! invite link, being added, leaving, deleted messages, attachments. They
//! carry no sentiment and skew any statistics, so they are dropped before
//! analysis.
//!
//! # Examples
//!
//! ```
//! use chatmood::core::filter::remove_standard_messages;
//! use chatmood::{MessageRecord, Transcript};
//!
//! # fn main() -> chatmood::Result<()> {
//! let transcript = Transcript::new(vec![
//!     MessageRecord::new("Alice added Bob"),
//!     MessageRecord::new("Good morning!").with_author("Bob"),
//!     MessageRecord::new("3 left"),
//! ]);
//!
//! let (filtered, report) = remove_standard_messages(&transcript)?;
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(report.total_matches(), 2);
//! // The input is untouched.
//! assert_eq!(transcript.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Matching is case-sensitive and substring-based: `added` also removes
//!   "I have added comments". This is intentionally broad.
//! - A record is removed if any pattern matches.
//! - Per-pattern counts are taken against the unfiltered input, so a record
//!   matching two patterns is counted under both.

use log::info;
use regex::Regex;

use crate::config::NoiseFilterConfig;
use crate::error::{ChatmoodError, Result};
use crate::message::{MessageRecord, Transcript};

/// Match count for one noise pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    /// The pattern as configured.
    pub pattern: String,
    /// Number of records whose message matches it.
    pub matches: usize,
}

/// Diagnostic counts produced by the noise filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseReport {
    /// Per-pattern counts, in configuration order.
    pub counts: Vec<PatternCount>,
    /// Records in the input.
    pub input_count: usize,
    /// Records removed.
    pub removed_count: usize,
}

impl NoiseReport {
    /// Sum of per-pattern counts (a record may count more than once).
    pub fn total_matches(&self) -> usize {
        self.counts.iter().map(|c| c.matches).sum()
    }

    /// Count for a specific pattern, if it was configured.
    pub fn count_for(&self, pattern: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.pattern == pattern)
            .map(|c| c.matches)
    }
}

/// Compiled noise filter.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    patterns: Vec<(String, Regex)>,
}

impl NoiseFilter {
    /// Compiles the patterns in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatmoodError::InvalidPattern`] for the first pattern that
    /// is not a valid regular expression.
    pub fn new(config: &NoiseFilterConfig) -> Result<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|p| {
                Regex::new(p)
                    .map(|re| (p.clone(), re))
                    .map_err(|e| ChatmoodError::invalid_pattern(p, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns `true` if the record's message matches any pattern.
    pub fn is_noise(&self, record: &MessageRecord) -> bool {
        self.patterns
            .iter()
            .any(|(_, re)| re.is_match(&record.message))
    }

    /// Counts matches per pattern and logs each count.
    pub fn count_matches(&self, transcript: &Transcript) -> NoiseReport {
        let counts = self
            .patterns
            .iter()
            .map(|(pattern, re)| {
                let matches = transcript
                    .iter()
                    .filter(|r| re.is_match(&r.message))
                    .count();
                info!("\"{}\" appears {} times", pattern, matches);
                PatternCount {
                    pattern: pattern.clone(),
                    matches,
                }
            })
            .collect();

        NoiseReport {
            counts,
            input_count: transcript.len(),
            removed_count: 0,
        }
    }

    /// Returns a new transcript without noise records, plus diagnostics.
    pub fn apply(&self, transcript: &Transcript) -> (Transcript, NoiseReport) {
        let mut report = self.count_matches(transcript);

        let filtered: Transcript = transcript
            .iter()
            .filter(|r| !self.is_noise(r))
            .cloned()
            .collect();

        report.removed_count = transcript.len() - filtered.len();
        info!(
            "Noise filter removed {} of {} records",
            report.removed_count, report.input_count
        );

        (filtered, report)
    }
}

/// Filters `transcript` with the default noise patterns.
pub fn remove_standard_messages(transcript: &Transcript) -> Result<(Transcript, NoiseReport)> {
    let filter = NoiseFilter::new(&NoiseFilterConfig::default())?;
    Ok(filter.apply(transcript))
}
