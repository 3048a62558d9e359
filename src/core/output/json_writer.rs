//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::message::Transcript;

/// Writes a transcript to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"Date": "2023-01-01", "Time": "10:00:00", "Author": "Alice", "Message": "Hello", "emoji": [], "Message_length": 5}
/// ]
/// ```
pub fn write_json(transcript: &Transcript, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a transcript to a JSON array string.
pub fn to_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}
