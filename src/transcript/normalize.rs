//! Input normalization
//!
//! Every analysis starts here: file and pasted-text input are collapsed into a
//! single canonical transcript string before any prompt is built.

use crate::{CandorError, Result};

/// An uploaded transcript file: its name (used to sniff JSON) and raw bytes.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileInput {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    fn is_json(&self) -> bool {
        self.name.ends_with(".json")
    }
}

/// The canonical normalized transcript. Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptText(String);

impl TranscriptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TranscriptText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse file and pasted-text input into one transcript string.
///
/// A file always wins over pasted text. JSON files (by `.json` extension) are
/// parsed and re-serialized with 2-space indentation so the model sees a
/// deterministic layout regardless of the original formatting; any other file
/// is taken as UTF-8 text verbatim. Pasted text is trimmed, and all-whitespace
/// paste counts as no input.
pub fn normalize(file: Option<&FileInput>, pasted: Option<&str>) -> Result<TranscriptText> {
    if let Some(file) = file {
        return normalize_file(file);
    }

    if let Some(pasted) = pasted {
        let trimmed = pasted.trim();
        if !trimmed.is_empty() {
            return Ok(TranscriptText(trimmed.to_string()));
        }
    }

    Err(CandorError::NoInput)
}

fn normalize_file(file: &FileInput) -> Result<TranscriptText> {
    if file.is_json() {
        let value: serde_json::Value = serde_json::from_slice(&file.bytes)
            .map_err(|e| CandorError::MalformedJson(e.to_string()))?;
        let pretty = serde_json::to_string_pretty(&value)
            .map_err(|e| CandorError::MalformedJson(e.to_string()))?;
        return Ok(TranscriptText(pretty));
    }

    let text = String::from_utf8(file.bytes.clone())
        .map_err(|e| CandorError::Decode(e.to_string()))?;
    Ok(TranscriptText(text))
}
