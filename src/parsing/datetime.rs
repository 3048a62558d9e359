//! Date and time normalization.
//!
//! Exports are inconsistent: two- and four-digit years, 12- and 24-hour
//! clocks, and narrow no-break spaces before `AM`/`PM` on some phones.
//! Anything that fails every configured format becomes `None`; a bad
//! timestamp never fails the pipeline.

use chrono::{NaiveDate, NaiveTime};

/// Parses a date string against `formats`, in order.
///
/// # Example
///
/// ```rust
/// use chatmood::parsing::normalize_date;
/// use chrono::NaiveDate;
///
/// let formats = ["%d/%m/%y".to_string(), "%d/%m/%Y".to_string()];
/// assert_eq!(normalize_date("1/2/23", &formats), NaiveDate::from_ymd_opt(2023, 2, 1));
/// assert_eq!(normalize_date("32/13/2023", &formats), None);
/// ```
pub fn normalize_date(date: &str, formats: &[String]) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}

/// Parses a time-of-day string against `formats`, in order.
pub fn normalize_time(time: &str, formats: &[String]) -> Option<NaiveTime> {
    let time: String = time
        .trim()
        .chars()
        .map(|c| if c == '\u{202f}' || c == '\u{a0}' { ' ' } else { c })
        .collect();
    if time.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&time, format).ok())
}
