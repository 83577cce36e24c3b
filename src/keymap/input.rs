//! Classification of KEY entry (modifier, key/note) pairs
//!
//! The modifier byte selects the input family:
//!
//! ```text
//!   0..=127   keyboard, low bits are Ctrl/Alt/Shift
//! 128..=254   MIDI, by status byte range
//!       255   special input (mouse wheel, gestures, media keys)
//! ```
//!
//! Anything outside `0..=255`, negative values included, is read as a
//! keyboard modifier. Classification is total: every modifier value yields
//! exactly one [`DecodedInput`] variant.

use std::fmt;

use serde::Serialize;

use super::types::Modifiers;

/// Media keyboard values with a known name
const MEDIA_KEYS: &[(i64, &str)] = &[
    (232, "MediaKbd??"),
    (488, "MediaKbdBrowse-"),
    (744, "MediaKbdBrowse+"),
    (1000, "MediaKbdBrowseRefr"),
];

/// Special input values at or above this are media keys
const MEDIA_KEY_MIN: i64 = 232;

const PRINTABLE_ASCII: std::ops::RangeInclusive<i64> = 32..=126;

/// MIDI data bytes are seven bits wide
const MIDI_DATA_RANGE: i64 = 128;

/// The decoded meaning of a KEY entry's input fields
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum DecodedInput {
    #[serde(rename = "MIDI")]
    Midi(MidiMessage),
    Special(SpecialInput),
    Keyboard(KeyboardInput),
}

/// MIDI shortcut sources; channels are 1-based
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "midi_type")]
pub enum MidiMessage {
    Note {
        channel: u8,
        note: u8,
    },
    #[serde(rename = "CC")]
    ControlChange { channel: u8, cc: u8 },
    #[serde(rename = "PC")]
    ProgramChange { channel: u8, pc: u8 },
    #[serde(rename = "Pitch")]
    PitchBend { channel: u8 },
    /// Any other status byte, with the data bytes in file order
    #[serde(rename = "XX YY YY")]
    Raw { xx: String, yy_yy: String },
}

/// Non-keyboard, non-MIDI sources bound through modifier 255
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "special_type")]
pub enum SpecialInput {
    MultiZoom,
    MultiRotate,
    MultiHorz,
    MultiVert,
    HorizWheel,
    Mousewheel,
    MediaKeyboard { media_key: String },
    /// A value below the media key range that no known set claims
    Unclassified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum KeyType {
    #[serde(rename = "ASCII")]
    Ascii,
    /// Extended virtual key; not decoded further
    #[serde(rename = "Special Key")]
    SpecialKey,
}

/// A keyboard shortcut
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KeyboardInput {
    pub modifiers: Modifiers,
    pub key_type: KeyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_char: Option<char>,
}

/// Classify a KEY entry's modifier and key/note values
pub fn decode_input(modifier: i64, value: i64) -> DecodedInput {
    // rem_euclid keeps the data byte in 0..128 for negative values
    let data = value.rem_euclid(MIDI_DATA_RANGE) as u8;

    match modifier {
        144..=159 => DecodedInput::Midi(MidiMessage::Note {
            channel: (modifier - 143) as u8,
            note: data,
        }),
        176..=191 => DecodedInput::Midi(MidiMessage::ControlChange {
            channel: (modifier - 175) as u8,
            cc: data,
        }),
        192..=207 => DecodedInput::Midi(MidiMessage::ProgramChange {
            channel: (modifier - 191) as u8,
            pc: data,
        }),
        224..=239 => DecodedInput::Midi(MidiMessage::PitchBend {
            channel: (modifier - 223) as u8,
        }),
        128..=143 | 160..=175 | 208..=223 | 240..=254 => {
            DecodedInput::Midi(MidiMessage::raw(modifier as u8, value))
        }
        255 => DecodedInput::Special(SpecialInput::from_value(value)),
        _ => DecodedInput::Keyboard(KeyboardInput::new(modifier, value)),
    }
}

impl MidiMessage {
    /// Raw status byte plus data bytes; the file stores them low byte first
    pub fn raw(status: u8, value: i64) -> Self {
        let low = value & 0xFF;
        let high = (value >> 8) & 0xFF;
        MidiMessage::Raw {
            xx: format!("{:02X}", status),
            yy_yy: format!("{:02X}{:02X}", low, high),
        }
    }
}

impl SpecialInput {
    pub fn from_value(value: i64) -> Self {
        match value {
            72..=74 | 200..=207 => SpecialInput::MultiZoom,
            24 | 25 | 152..=159 => SpecialInput::MultiRotate,
            40 | 168..=175 => SpecialInput::MultiHorz,
            56 | 184..=191 => SpecialInput::MultiVert,
            88 | 90 | 216..=223 => SpecialInput::HorizWheel,
            120..=123 | 125 | 248..=255 => SpecialInput::Mousewheel,
            v if v >= MEDIA_KEY_MIN => SpecialInput::MediaKeyboard {
                media_key: media_key_name(v),
            },
            _ => SpecialInput::Unclassified,
        }
    }
}

/// Name of a media keyboard key, or a placeholder carrying the raw value
pub fn media_key_name(value: i64) -> String {
    MEDIA_KEYS
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("Unknown ({})", value))
}

impl KeyboardInput {
    pub fn new(modifier: i64, value: i64) -> Self {
        let modifiers = Modifiers::from_modifier_value(modifier);

        // Odd modifiers store a virtual key code rather than ASCII
        if modifier.rem_euclid(2) == 0 {
            Self {
                modifiers,
                key_type: KeyType::Ascii,
                key_code: Some(value),
                key_char: PRINTABLE_ASCII
                    .contains(&value)
                    .then(|| char::from_u32(value as u32))
                    .flatten(),
            }
        } else {
            Self {
                modifiers,
                key_type: KeyType::SpecialKey,
                key_code: None,
                key_char: None,
            }
        }
    }
}

impl fmt::Display for DecodedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedInput::Midi(midi) => write!(f, "{}", midi),
            DecodedInput::Special(special) => write!(f, "{}", special),
            DecodedInput::Keyboard(key) => write!(f, "{}", key),
        }
    }
}

impl fmt::Display for MidiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiMessage::Note { channel, note } => write!(f, "MIDI Ch{} Note {}", channel, note),
            MidiMessage::ControlChange { channel, cc } => write!(f, "MIDI Ch{} CC {}", channel, cc),
            MidiMessage::ProgramChange { channel, pc } => write!(f, "MIDI Ch{} PC {}", channel, pc),
            MidiMessage::PitchBend { channel } => write!(f, "MIDI Ch{} Pitch", channel),
            MidiMessage::Raw { xx, yy_yy } => write!(f, "MIDI {} {}", xx, yy_yy),
        }
    }
}

impl fmt::Display for SpecialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialInput::MultiZoom => write!(f, "MultiZoom"),
            SpecialInput::MultiRotate => write!(f, "MultiRotate"),
            SpecialInput::MultiHorz => write!(f, "MultiHorz"),
            SpecialInput::MultiVert => write!(f, "MultiVert"),
            SpecialInput::HorizWheel => write!(f, "HorizWheel"),
            SpecialInput::Mousewheel => write!(f, "Mousewheel"),
            SpecialInput::MediaKeyboard { media_key } => write!(f, "{}", media_key),
            SpecialInput::Unclassified => write!(f, "Special"),
        }
    }
}

impl fmt::Display for KeyboardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }
        match (self.key_char, self.key_code) {
            (Some(' '), _) => write!(f, "Space"),
            (Some(c), _) => write!(f, "{}", c),
            (None, Some(code)) => write!(f, "Key {}", code),
            (None, None) => write!(f, "Special key"),
        }
    }
}
