//! Line-by-line decoding of keymap text
//!
//! ```text
//! line → EntryKind::classify → split_comment → decode_{action,script,key} → Keymap
//! ```
//!
//! The decoder holds only its options; every call builds its own result.

use serde::{Deserialize, Serialize};

use super::entry::{decode_action, decode_key, decode_script, EntrySource};
use super::error::{InvalidNumber, KeymapError};
use super::keymap::{Entry, Keymap};
use super::line::{split_comment, CommentMode, EntryKind};
use super::source::lines;

/// What to do with a line whose numeric fields do not parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Fail the whole decode
    #[default]
    Abort,
    /// Drop the line and record it in [`DecodeReport::skipped`]
    Skip,
}

/// Options controlling how lines are decoded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub comment_mode: CommentMode,
    pub error_policy: ErrorPolicy,
}

/// The result of decoding a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Entry(Entry),
    /// Blank, or not an entry line
    Ignored,
    /// An entry line with too few fields
    Malformed(EntryKind),
}

/// A line dropped under [`ErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub error: InvalidNumber,
}

/// Decoded keymap plus what was left out of it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub keymap: Keymap,
    pub skipped: Vec<SkippedLine>,
    /// Entry lines discarded for having too few fields
    pub malformed: usize,
}

/// Decodes keymap lines into a [`Keymap`]
#[derive(Debug, Clone, Default)]
pub struct KeymapDecoder {
    options: DecodeOptions,
}

impl KeymapDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decode one line; surrounding whitespace is ignored
    pub fn decode_line(&self, line: &str) -> Result<LineOutcome, InvalidNumber> {
        let line = line.trim();
        let Some(kind) = EntryKind::classify(line) else {
            return Ok(LineOutcome::Ignored);
        };

        let split = split_comment(line, self.options.comment_mode);
        let source = EntrySource {
            body: split.body(),
            raw_line: line,
            comment: split.comment,
        };

        let entry = match kind {
            EntryKind::Action => decode_action(source)?.map(Entry::Action),
            EntryKind::Script => decode_script(source)?.map(Entry::Script),
            EntryKind::Key => decode_key(source)?.map(Entry::Key),
        };

        Ok(entry.map_or(LineOutcome::Malformed(kind), LineOutcome::Entry))
    }

    /// Decode every line, in order
    pub fn decode<I, S>(&self, lines: I) -> Result<DecodeReport, KeymapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = DecodeReport::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;

            match self.decode_line(line.as_ref()) {
                Ok(LineOutcome::Entry(entry)) => report.keymap.push(entry),
                Ok(LineOutcome::Ignored) => {}
                Ok(LineOutcome::Malformed(kind)) => {
                    tracing::debug!(line = line_number, %kind, "Discarding entry with too few fields");
                    report.malformed += 1;
                }
                Err(error) => match self.options.error_policy {
                    ErrorPolicy::Abort => {
                        return Err(KeymapError::InvalidNumber {
                            line: line_number,
                            source: error,
                        });
                    }
                    ErrorPolicy::Skip => {
                        tracing::debug!(line = line_number, "Skipping line: {}", error);
                        report.skipped.push(SkippedLine {
                            line: line_number,
                            error,
                        });
                    }
                },
            }
        }

        tracing::debug!(
            actions = report.keymap.actions.len(),
            scripts = report.keymap.scripts.len(),
            keys = report.keymap.keys.len(),
            "Decoded keymap"
        );

        Ok(report)
    }

    /// Decode a whole text buffer; `\n`, `\r\n` and `\r` all end a line
    pub fn decode_str(&self, text: &str) -> Result<DecodeReport, KeymapError> {
        self.decode(lines(text))
    }
}

/// Parse keymap text with default options
pub fn parse_keymap(text: &str) -> Result<Keymap, KeymapError> {
    KeymapDecoder::default()
        .decode_str(text)
        .map(|report| report.keymap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::error::NumericField;

    #[test]
    fn test_decode_line_ignores_non_entries() {
        let decoder = KeymapDecoder::default();
        assert_eq!(decoder.decode_line(""), Ok(LineOutcome::Ignored));
        assert_eq!(decoder.decode_line("   "), Ok(LineOutcome::Ignored));
        assert_eq!(decoder.decode_line("XYZ foo"), Ok(LineOutcome::Ignored));
        assert_eq!(decoder.decode_line("# comment"), Ok(LineOutcome::Ignored));
    }

    #[test]
    fn test_decode_line_malformed() {
        let decoder = KeymapDecoder::default();
        assert_eq!(
            decoder.decode_line("KEY 0 65"),
            Ok(LineOutcome::Malformed(EntryKind::Key))
        );
        assert_eq!(
            decoder.decode_line(r#"ACT 0 0 "_x" # "a" "b""#),
            Ok(LineOutcome::Malformed(EntryKind::Action))
        );
    }

    #[test]
    fn test_decode_line_trims_before_classifying() {
        let decoder = KeymapDecoder::default();
        let Ok(LineOutcome::Entry(entry)) = decoder.decode_line("  KEY 0 65 40 0  \r") else {
            panic!("Expected an entry");
        };
        assert_eq!(entry.raw_line(), "KEY 0 65 40 0");
    }

    #[test]
    fn test_abort_policy_reports_line_number() {
        let decoder = KeymapDecoder::default();
        let err = decoder
            .decode(["KEY 0 65 40 0", "", "KEY x 65 40 0"])
            .unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_skip_policy_continues() {
        let decoder = KeymapDecoder::new(DecodeOptions {
            error_policy: ErrorPolicy::Skip,
            ..DecodeOptions::default()
        });
        let report = decoder
            .decode(["KEY x 65 40 0", "KEY 0 65 40 0", "ACT 1 zz \"a\" \"b\" 1"])
            .unwrap();

        assert_eq!(report.keymap.keys.len(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line, 1);
        assert_eq!(report.skipped[0].error.field, NumericField::ModifierValue);
        assert_eq!(report.skipped[1].line, 3);
        assert_eq!(report.skipped[1].error.field, NumericField::SectionId);
    }

    #[test]
    fn test_malformed_lines_are_counted() {
        let report = KeymapDecoder::default()
            .decode(["KEY 0", "SCR 4 0", "KEY 0 65 40 0"])
            .unwrap();
        assert_eq!(report.malformed, 2);
        assert_eq!(report.keymap.len(), 1);
    }

    #[test]
    fn test_comment_mode_changes_description() {
        let line = r#"ACT 0 0 "_X" "Track #1" 40001"#;

        let quote_aware = KeymapDecoder::default().decode_line(line).unwrap();
        let LineOutcome::Entry(Entry::Action(action)) = quote_aware else {
            panic!("Expected an action");
        };
        assert_eq!(action.description, "Track #1");
        assert_eq!(action.comment, "");

        let legacy = KeymapDecoder::new(DecodeOptions {
            comment_mode: CommentMode::Legacy,
            ..DecodeOptions::default()
        });
        assert_eq!(
            legacy.decode_line(line),
            Ok(LineOutcome::Malformed(EntryKind::Action))
        );
    }
}
