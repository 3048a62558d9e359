//! Line-level parsing utilities.
//!
//! This module contains the pieces the transcript assembler is built from:
//! - [`line`] - recognizing timestamp lines and splitting them into fields
//! - [`datetime`] - normalizing the extracted date and time strings

pub mod datetime;
pub mod line;

pub use datetime::{normalize_date, normalize_time};
pub use line::{LinePatterns, RawDatapoint};
