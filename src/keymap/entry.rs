//! Entry records and the per-kind decoders
//!
//! Each decoder receives the entry body (prefix and comment already removed)
//! and returns `Ok(None)` when the line has too few fields to be an entry.

use serde::Serialize;

use super::error::{InvalidNumber, NumericField};
use super::input::{decode_input, DecodedInput};
use super::section::{is_global_section, section_name};
use super::settings::{ActionSettings, ScriptSettings};
use super::tokenize::split_preserving_quotes;

const ACTION_MIN_FIELDS: usize = 5;
const SCRIPT_MIN_FIELDS: usize = 5;
const KEY_MIN_FIELDS: usize = 4;

/// Source text shared by every entry kind
#[derive(Clone, Copy, Debug)]
pub struct EntrySource<'a> {
    /// Entry body after the four character prefix, comment removed
    pub body: &'a str,
    /// The complete line as read, comment included
    pub raw_line: &'a str,
    /// Trailing comment including `#`, or empty
    pub comment: &'a str,
}

/// A custom action (`ACT`) binding several commands under one ID
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ACT")]
pub struct ActionEntry {
    pub settings: i64,
    pub settings_flags: ActionSettings,
    pub section_id: i64,
    pub section_name: String,
    pub action_command_id: String,
    pub description: String,
    pub extra_command_ids: Vec<String>,
    pub raw_line: String,
    pub comment: String,
}

/// A ReaScript (`SCR`) registration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "SCR")]
pub struct ScriptEntry {
    pub settings: i64,
    pub settings_flags: ScriptSettings,
    pub section_id: i64,
    pub section_name: String,
    pub action_command_id: String,
    pub description: String,
    pub script_path: String,
    pub raw_line: String,
    pub comment: String,
}

/// Scope of a global (section 102/103) shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GlobalScope {
    #[serde(rename = "global")]
    Global,
    #[serde(rename = "global+textfields")]
    GlobalTextFields,
    #[serde(rename = "unknown")]
    Unknown,
}

impl GlobalScope {
    /// Compared as text: `"01"` is not `"1"`
    pub fn from_command_id(action_command_id: &str) -> Self {
        match action_command_id {
            "1" => GlobalScope::Global,
            "101" => GlobalScope::GlobalTextFields,
            _ => GlobalScope::Unknown,
        }
    }
}

/// A keyboard, MIDI or special-input shortcut (`KEY`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "KEY")]
pub struct KeyEntry {
    pub modifier_value: i64,
    pub key_or_note_value: i64,
    pub decoded_input: DecodedInput,
    pub action_command_id: String,
    pub section_id: i64,
    pub section_name: String,
    pub is_global: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_scope: Option<GlobalScope>,
    pub raw_line: String,
    pub comment: String,
}

/// Any signed integer is accepted; only text that is not an integer fails
fn parse_number(token: &str, field: NumericField) -> Result<i64, InvalidNumber> {
    token
        .parse()
        .map_err(|_| InvalidNumber::new(field, token))
}

/// Decode an `ACT` body: `settings section "id" "description" cmd [cmd ...]`
pub fn decode_action(source: EntrySource<'_>) -> Result<Option<ActionEntry>, InvalidNumber> {
    let parts = split_preserving_quotes(source.body);
    if parts.len() < ACTION_MIN_FIELDS {
        return Ok(None);
    }

    let settings = parse_number(parts[0], NumericField::Settings)?;
    let section_id = parse_number(parts[1], NumericField::SectionId)?;

    Ok(Some(ActionEntry {
        settings,
        settings_flags: ActionSettings::from_bits(settings),
        section_id,
        section_name: section_name(section_id),
        action_command_id: parts[2].trim_matches('"').to_string(),
        description: parts[3].trim_matches('"').to_string(),
        extra_command_ids: parts[4..].iter().map(|id| id.to_string()).collect(),
        raw_line: source.raw_line.to_string(),
        comment: source.comment.to_string(),
    }))
}

/// Decode an `SCR` body: `settings section id "description" path`
pub fn decode_script(source: EntrySource<'_>) -> Result<Option<ScriptEntry>, InvalidNumber> {
    let parts = split_preserving_quotes(source.body);
    if parts.len() < SCRIPT_MIN_FIELDS {
        return Ok(None);
    }

    let settings = parse_number(parts[0], NumericField::Settings)?;
    let section_id = parse_number(parts[1], NumericField::SectionId)?;

    Ok(Some(ScriptEntry {
        settings,
        settings_flags: ScriptSettings::from_bits(settings),
        section_id,
        section_name: section_name(section_id),
        action_command_id: parts[2].to_string(),
        description: parts[3].trim_matches('"').to_string(),
        script_path: parts[4].to_string(),
        raw_line: source.raw_line.to_string(),
        comment: source.comment.to_string(),
    }))
}

/// Decode a `KEY` body: `modifier key_or_note command section`
pub fn decode_key(source: EntrySource<'_>) -> Result<Option<KeyEntry>, InvalidNumber> {
    let parts: Vec<&str> = source.body.split_whitespace().collect();
    if parts.len() < KEY_MIN_FIELDS {
        return Ok(None);
    }

    let modifier_value = parse_number(parts[0], NumericField::ModifierValue)?;
    let key_or_note_value = parse_number(parts[1], NumericField::KeyOrNoteValue)?;
    let action_command_id = parts[2];
    let section_id = parse_number(parts[3], NumericField::SectionId)?;

    let is_global = is_global_section(section_id);
    let global_scope = is_global.then(|| GlobalScope::from_command_id(action_command_id));

    Ok(Some(KeyEntry {
        modifier_value,
        key_or_note_value,
        decoded_input: decode_input(modifier_value, key_or_note_value),
        action_command_id: action_command_id.to_string(),
        section_id,
        section_name: section_name(section_id),
        is_global,
        global_scope,
        raw_line: source.raw_line.to_string(),
        comment: source.comment.to_string(),
    }))
}
