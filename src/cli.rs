//! Command-line argument parsing
//!
//! Supports:
//! - Choosing JSON or YAML output
//! - Skipping lines with unparsable numbers instead of failing
//! - Legacy comment handling (first `#` anywhere)
//! - Restricting output to one entry kind

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{OutputFormat, ParserConfig};
use crate::keymap::{CommentMode, DecodeOptions, EntryKind, ErrorPolicy};

/// Decode a REAPER keymap file
#[derive(Parser, Debug)]
#[command(name = "reaper-keymap", version, about = "Decode a REAPER keymap file")]
pub struct CliArgs {
    /// Path to reaper-kb.ini
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format (defaults to the config file setting)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Skip lines with invalid numbers instead of failing
    #[arg(short = 's', long)]
    pub skip_invalid: bool,

    /// Treat the first `#` as a comment even inside quotes
    #[arg(long)]
    pub legacy_comments: bool,

    /// Only output entries of one kind
    #[arg(long, value_enum, value_name = "KIND")]
    pub only: Option<OnlyKind>,
}

/// Entry kind filter for `--only`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnlyKind {
    #[value(alias = "actions")]
    Act,
    #[value(alias = "scripts")]
    Scr,
    #[value(alias = "keys")]
    Key,
}

impl From<OnlyKind> for EntryKind {
    fn from(kind: OnlyKind) -> Self {
        match kind {
            OnlyKind::Act => EntryKind::Action,
            OnlyKind::Scr => EntryKind::Script,
            OnlyKind::Key => EntryKind::Key,
        }
    }
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    pub options: DecodeOptions,
    pub format: OutputFormat,
    pub pretty: bool,
    pub only: Option<EntryKind>,
}

impl CliArgs {
    /// Merge parsed CLI args over the persisted config
    pub fn into_config(self, config: &ParserConfig) -> RunConfig {
        let mut options = config.decode_options();
        if self.skip_invalid {
            options.error_policy = ErrorPolicy::Skip;
        }
        if self.legacy_comments {
            options.comment_mode = CommentMode::Legacy;
        }

        RunConfig {
            path: self.path,
            options,
            format: self.format.unwrap_or(config.output_format),
            pretty: !self.compact,
            only: self.only.map(EntryKind::from),
        }
    }
}
