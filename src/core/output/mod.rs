//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited table - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//!
//! All three share the column names of [`MessageRecord`](crate::MessageRecord):
//! `Date`, `Time`, `Author`, `Message`, `emoji`, `Message_length`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatmood::Result<()> {
//! use chatmood::core::output::{to_csv, write_csv, write_jsonl};
//! use chatmood::{MessageRecord, Transcript};
//!
//! let transcript = Transcript::new(vec![
//!     MessageRecord::new("Hello!").with_author("Alice"),
//!     MessageRecord::new("Hi there!").with_author("Bob"),
//! ]);
//!
//! write_csv(&transcript, "chat.csv")?;
//! write_jsonl(&transcript, "chat.jsonl")?;
//!
//! let csv_string = to_csv(&transcript)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
