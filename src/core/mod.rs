//! Core processing logic for chatmood.
//!
//! - [`features`] - emoji extraction and message length
//! - [`filter`] - removal of system and filler messages
//! - [`processor`] - the parse-then-filter pipeline and its statistics
//! - [`output`] - format writers (CSV, JSON, JSONL)

pub mod features;
pub mod filter;
pub mod output;
pub mod processor;

pub use features::{extract_emoji, message_length};
pub use filter::{NoiseFilter, NoiseReport, PatternCount, remove_standard_messages};
pub use processor::{ProcessingStats, process_file, process_str};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
