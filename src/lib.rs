//! REAPER keymap decoder
//!
//! This crate parses `reaper-kb.ini` keymap files into typed action, script
//! and shortcut records that can be inspected, diffed or serialized without
//! REAPER itself.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod output;
pub mod tracing;

// Re-export commonly used types
pub use config::{OutputFormat, ParserConfig};
pub use keymap::{
    load_keymap_file, parse_keymap, DecodeOptions, DecodeReport, Keymap, KeymapDecoder,
    KeymapError,
};
