//! JSON Lines (JSONL) output writer.
//!
//! One record per line, suited to loading into dataframes or streaming
//! into downstream tools one message at a time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::message::Transcript;

/// Writes a transcript in JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"Date":"2023-01-01","Time":"10:00:00","Author":"Alice","Message":"Hello","emoji":[],"Message_length":5}
/// {"Date":"2023-01-02","Time":"11:05:00","Author":"Bob","Message":"Bye","emoji":[],"Message_length":3}
/// ```
pub fn write_jsonl(transcript: &Transcript, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in transcript {
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{}", json)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts a transcript to a JSONL string.
pub fn to_jsonl(transcript: &Transcript) -> Result<String> {
    let mut output = String::new();
    for record in transcript {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRecord;
    use tempfile::NamedTempFile;

    fn sample() -> Transcript {
        Transcript::new(vec![
            MessageRecord::new("Hello").with_author("Alice"),
            MessageRecord::new("Bye").with_author("Bob"),
        ])
    }

    #[test]
    fn test_one_object_per_line() {
        let jsonl = to_jsonl(&sample()).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.is_object());
        }
        assert!(lines[1].contains(r#""Message":"Bye""#));
    }

    #[test]
    fn test_write_matches_string() {
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&sample(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, to_jsonl(&sample()).unwrap());
    }

    #[test]
    fn test_empty_transcript_writes_nothing() {
        assert!(to_jsonl(&Transcript::default()).unwrap().is_empty());
    }
}
