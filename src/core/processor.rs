//! End-to-end processing: read an export, rebuild its messages, drop noise.

use std::path::Path;

use log::info;

use crate::config::PipelineConfig;
use crate::core::filter::{NoiseFilter, PatternCount};
use crate::error::Result;
use crate::message::Transcript;
use crate::parser::TranscriptParser;

/// Statistics about the processing result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Records rebuilt from the export.
    pub parsed_count: usize,
    /// Records left after noise filtering.
    pub filtered_count: usize,
    /// Per-pattern match counts; empty when filtering is disabled.
    pub removed_by_pattern: Vec<PatternCount>,
}

impl ProcessingStats {
    /// Percentage of parsed records removed as noise.
    pub fn removal_ratio(&self) -> f64 {
        if self.parsed_count == 0 {
            return 0.0;
        }
        (1.0 - (self.filtered_count as f64 / self.parsed_count as f64)) * 100.0
    }

    /// Number of records removed.
    pub fn removed_count(&self) -> usize {
        self.parsed_count - self.filtered_count
    }
}

/// Reads, parses and filters an export file.
///
/// # Example
///
/// ```rust,no_run
/// use chatmood::config::PipelineConfig;
/// use chatmood::core::processor::process_file;
///
/// let (transcript, stats) = process_file("chat.txt", &PipelineConfig::default())?;
/// println!("{} messages, {:.1}% noise", transcript.len(), stats.removal_ratio());
/// # Ok::<(), chatmood::ChatmoodError>(())
/// ```
pub fn process_file(
    path: impl AsRef<Path>,
    config: &PipelineConfig,
) -> Result<(Transcript, ProcessingStats)> {
    let content = std::fs::read_to_string(path)?;
    process_str(&content, config)
}

/// Parses and filters export content held in memory.
pub fn process_str(content: &str, config: &PipelineConfig) -> Result<(Transcript, ProcessingStats)> {
    let parser = TranscriptParser::with_config(config.transcript.clone())?;
    let transcript = parser.parse_str(content)?;
    let parsed_count = transcript.len();

    let (transcript, removed_by_pattern) = match &config.noise {
        Some(noise) => {
            let (filtered, report) = NoiseFilter::new(noise)?.apply(&transcript);
            (filtered, report.counts)
        }
        None => (transcript, Vec::new()),
    };

    let stats = ProcessingStats {
        parsed_count,
        filtered_count: transcript.len(),
        removed_by_pattern,
    };
    info!(
        "Processed {} records, kept {} ({:.1}% removed)",
        stats.parsed_count,
        stats.filtered_count,
        stats.removal_ratio()
    );

    Ok((transcript, stats))
}
