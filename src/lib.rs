//! # Chatmood
//!
//! Turns line-oriented chat exports into a clean table of messages ready for
//! sentiment analysis.
//!
//! ## Overview
//!
//! A text export writes one line per physical line of text. A message that
//! spans several lines only carries its date, time and author on the first
//! one. Chatmood:
//!
//! 1. folds continuation lines back into the message they belong to,
//! 2. normalizes dates and times, flags system messages (no author), and
//!    derives per-message features (emoji list, character count),
//! 3. removes standard system and filler notices,
//! 4. optionally labels each message with a sentiment classifier.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatmood::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let (transcript, stats) = process_file("chat.txt", &PipelineConfig::default())?;
//!     println!("{} messages kept of {}", stats.filtered_count, stats.parsed_count);
//!
//!     for record in &transcript {
//!         println!("{:?}: {} ({} emoji)", record.author, record.message, record.emoji.len());
//!     }
//!
//!     write_csv(&transcript, "chat.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the line fold
//! - [`parsing`] - timestamp line detection and date/time normalization
//! - [`message`] - [`MessageRecord`] and [`Transcript`]
//! - [`core`] - features, noise filter, pipeline, output writers
//! - [`sentiment`] - classifier seam and result attachment
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - configuration types
//! - [`error`] - [`ChatmoodError`] and [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `csv-output` | CSV writer | yes |
//! | `json-output` | JSON / JSONL writers | yes |
//! | `hf-inference` | Remote sentiment classifier over HTTP | no |
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. The library never installs a
//! logger; pick one (`env_logger`, `simplelog`, ...) in the application.

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod sentiment;

// Re-export the main types at the crate root for convenience
pub use error::{ChatmoodError, Result};
pub use message::{MessageRecord, Transcript};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatmood::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, Transcript};

    pub use crate::error::{ChatmoodError, Result};

    pub use crate::config::{NoiseFilterConfig, PipelineConfig, SentimentConfig, TranscriptConfig};

    pub use crate::parser::TranscriptParser;

    pub use crate::core::filter::{NoiseFilter, NoiseReport, remove_standard_messages};
    pub use crate::core::processor::{ProcessingStats, process_file, process_str};

    pub use crate::sentiment::{
        SentimentClassifier, SentimentLabel, SentimentResult, annotate_sentiment,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format};
}
