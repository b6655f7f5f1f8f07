//! Structured text file parsing.
//!
//! Input files carry optional `Key: value` header lines, then a blank
//! line, then the free-form narration text:
//!
//! ```text
//! Language: Spanish
//! Style: formal
//!
//! Text to narrate.
//! ```

use std::collections::HashMap;

/// Starter file written by the `generate-template` subcommand.
pub const TEMPLATE: &str = "Language: Spanish
Style: normal
Voice: alloy
Output: output.mp3

Your text here.
";

/// Metadata parsed from a structured text file.
///
/// Keys are trimmed and lower-cased; unrecognized keys are kept but
/// ignored by the resolver. `text` is everything after the first blank
/// line, trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetadata {
    fields: HashMap<String, String>,
    text: String,
}

impl FileMetadata {
    /// Look up a header value by its lower-cased key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The free-form narration body. Empty if the file had no blank line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse the full content of a structured text file.
///
/// Header scanning stops at the first blank line; everything after it is
/// the narration body. A line whose first colon is at index 0 (`": oops"`)
/// is not a header. Defaults for missing keys are the resolver's job.
pub fn parse_metadata(content: &str) -> FileMetadata {
    let lines: Vec<&str> = content.lines().collect();
    let mut fields = HashMap::new();
    let mut body_start = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            body_start = Some(i + 1);
            break;
        }
        if let Some(colon) = line.find(':')
            && colon > 0
        {
            let key = line[..colon].trim().to_lowercase();
            let value = line[colon + 1..].trim().to_string();
            fields.insert(key, value);
        }
    }

    let text = match body_start {
        Some(start) => lines[start..].join("\n").trim().to_string(),
        None => String::new(),
    };

    FileMetadata { fields, text }
}
