//! Bulk import of records from uploaded CSV and plain-text files.
//!
//! Imported records bypass validation entirely; the caller appends whatever
//! parses. Parsing is all-or-nothing: one malformed line fails the file.

mod csv;
mod text;

use serde::Serialize;

use crate::ids::IdGenerator;
use crate::record::Record;

pub use csv::parse_csv;
pub use text::parse_text;

/// Number of comma-separated fields on a plain-text import line.
pub const TEXT_FIELD_COUNT: usize = 11;

/// Supported upload formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Csv,
    Text,
}

impl ImportFormat {
    /// Resolve the format from an uploaded file name (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, ImportError> {
        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "txt" => Ok(Self::Text),
            _ => Err(ImportError::UnsupportedFormat(filename.to_string())),
        }
    }

    /// Message returned to the client after a successful import.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Csv => "csv processed successfully",
            Self::Text => "Text data processed successfully",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Unsupported file type '{0}'. Only .csv and .txt files are allowed")]
    UnsupportedFormat(String),

    #[error("File is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("Line {line}: expected {TEXT_FIELD_COUNT} comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse an uploaded file into records.
///
/// Rows without an id receive one from `ids`.
pub fn parse_import(
    format: ImportFormat,
    data: &[u8],
    ids: &IdGenerator,
) -> Result<Vec<Record>, ImportError> {
    let text = std::str::from_utf8(data)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    match format {
        ImportFormat::Csv => parse_csv(text, ids),
        ImportFormat::Text => parse_text(text, ids),
    }
}

fn id_or_generate(raw: &str, ids: &IdGenerator) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ids.next_id()
    } else {
        trimmed.to_string()
    }
}
