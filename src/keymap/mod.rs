//! REAPER keymap (`reaper-kb.ini`) decoding
//!
//! A keymap file is line oriented. Three kinds of lines carry bindings:
//!
//! ```text
//! ACT settings section "command_id" "description" cmd [cmd ...]   custom action
//! SCR settings section command_id "description" script_path       ReaScript
//! KEY modifier key_or_note command_id section                     shortcut
//! ```
//!
//! Everything after an unquoted `#` is a comment. Other lines are ignored.
//!
//! # Architecture
//!
//! ```text
//! lines → KeymapDecoder::decode_line → decode_{action,script,key} → Keymap
//!                                                 ↓
//!                               settings / section / decode_input
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Decode text already in memory
//! let keymap = parse_keymap(&text)?;
//!
//! // Or read a file, tolerating lines with bad numbers
//! let decoder = KeymapDecoder::new(DecodeOptions {
//!     error_policy: ErrorPolicy::Skip,
//!     ..DecodeOptions::default()
//! });
//! let report = load_keymap_file(Path::new("reaper-kb.ini"), &decoder)?;
//! ```

mod decoder;
mod entry;
mod error;
mod input;
#[allow(clippy::module_inception)]
mod keymap;
mod line;
mod section;
mod settings;
mod source;
mod tokenize;
mod types;

pub use decoder::{
    parse_keymap, DecodeOptions, DecodeReport, ErrorPolicy, KeymapDecoder, LineOutcome,
    SkippedLine,
};
pub use entry::{
    decode_action, decode_key, decode_script, ActionEntry, EntrySource, GlobalScope, KeyEntry,
    ScriptEntry,
};
pub use error::{InvalidNumber, KeymapError, NumericField};
pub use input::{
    decode_input, media_key_name, DecodedInput, KeyType, KeyboardInput, MidiMessage, SpecialInput,
};
pub use keymap::{Entry, Keymap};
pub use line::{split_comment, CommentMode, EntryKind, SplitLine, PREFIX_LEN};
pub use section::{is_global_section, known_section, section_name, GLOBAL_SECTIONS};
pub use settings::{ActionSettings, InstanceBehavior, ScriptSettings};
pub use source::{decode_text, load_keymap_file, read_keymap_lines, split_lines};
pub use tokenize::split_preserving_quotes;
pub use types::Modifiers;
