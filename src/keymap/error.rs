//! Error types for keymap decoding

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Numeric fields of an entry line that must parse as integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Settings,
    SectionId,
    ModifierValue,
    KeyOrNoteValue,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericField::Settings => "settings",
            NumericField::SectionId => "section id",
            NumericField::ModifierValue => "modifier value",
            NumericField::KeyOrNoteValue => "key/note value",
        };
        f.write_str(name)
    }
}

/// A required integer field could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {value:?}")]
pub struct InvalidNumber {
    pub field: NumericField,
    pub value: String,
}

impl InvalidNumber {
    pub fn new(field: NumericField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Errors that abort decoding a keymap file
#[derive(Debug, Error)]
pub enum KeymapError {
    /// A numeric field failed to parse and the error policy is `Abort`
    #[error("line {line}: {source}")]
    InvalidNumber {
        line: usize,
        #[source]
        source: InvalidNumber,
    },

    /// The keymap file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KeymapError {
    /// 1-based source line of a numeric failure, if that is what this is
    pub fn line(&self) -> Option<usize> {
        match self {
            KeymapError::InvalidNumber { line, .. } => Some(*line),
            KeymapError::Io { .. } => None,
        }
    }
}
