//! Line classification and comment splitting
//!
//! Every entry line starts with a four character prefix (`"ACT "`, `"SCR "` or
//! `"KEY "`). Anything else, including blank lines and section headers, is
//! ignored by the decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the entry prefix including its trailing space
pub const PREFIX_LEN: usize = 4;

/// The three kinds of keymap entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Action,
    Script,
    Key,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::Action, EntryKind::Script, EntryKind::Key];

    /// The line prefix that introduces this entry kind
    pub const fn prefix(self) -> &'static str {
        match self {
            EntryKind::Action => "ACT ",
            EntryKind::Script => "SCR ",
            EntryKind::Key => "KEY ",
        }
    }

    /// Three letter tag as written in the file
    pub const fn tag(self) -> &'static str {
        match self {
            EntryKind::Action => "ACT",
            EntryKind::Script => "SCR",
            EntryKind::Key => "KEY",
        }
    }

    /// Classify a (trimmed) line by its prefix
    pub fn classify(line: &str) -> Option<EntryKind> {
        Self::ALL
            .into_iter()
            .find(|kind| line.starts_with(kind.prefix()))
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How the trailing `#` comment of a line is located
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// `#` inside a double-quoted run is part of the text
    #[default]
    QuoteAware,
    /// The first `#` anywhere starts the comment, even inside quotes
    Legacy,
}

/// A line split into its entry body and trailing comment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Text before the comment, trimmed
    pub main: &'a str,
    /// The comment including its `#`, trimmed; empty when absent
    pub comment: &'a str,
}

impl<'a> SplitLine<'a> {
    /// The entry body with the four character prefix removed
    pub fn body(&self) -> &'a str {
        self.main.get(PREFIX_LEN..).unwrap_or_default()
    }
}

/// Split a line at its comment delimiter
pub fn split_comment(line: &str, mode: CommentMode) -> SplitLine<'_> {
    let position = match mode {
        CommentMode::Legacy => line.find('#'),
        CommentMode::QuoteAware => find_unquoted_hash(line),
    };

    match position {
        Some(pos) => SplitLine {
            main: line[..pos].trim(),
            comment: line[pos..].trim(),
        },
        None => SplitLine {
            main: line.trim(),
            comment: "",
        },
    }
}

fn find_unquoted_hash(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return Some(idx),
            _ => {}
        }
    }

    None
}
