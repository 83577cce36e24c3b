//! Keyboard modifier bits as stored in KEY entries

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Modifier keys as a bitfield, in the bit layout of the keymap file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b001);
    pub const ALT: Modifiers = Modifiers(0b010);
    pub const SHIFT: Modifiers = Modifiers(0b100);

    const MASK: u8 = 0b111;

    /// Extract the modifier bits from a raw KEY modifier value
    ///
    /// Only the low three bits count, so values outside `0..=255` (negative
    /// ones included) still yield a modifier set.
    pub const fn from_modifier_value(value: i64) -> Self {
        Modifiers((value & Self::MASK as i64) as u8)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the held modifiers, always in Ctrl, Alt, Shift order
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(3);
        if self.ctrl() {
            names.push("Ctrl");
        }
        if self.alt() {
            names.push("Alt");
        }
        if self.shift() {
            names.push("Shift");
        }
        names
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join("+"))
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.alt());
        assert!(!mods.shift());
        assert!(mods.names().is_empty());
    }

    #[test]
    fn test_modifiers_individual() {
        assert!(Modifiers::CTRL.ctrl());
        assert!(!Modifiers::CTRL.alt());
        assert!(Modifiers::ALT.alt());
        assert!(Modifiers::SHIFT.shift());
    }

    #[test]
    fn test_from_modifier_value_ignores_high_bits() {
        let mods = Modifiers::from_modifier_value(0b1000_0101);
        assert!(mods.ctrl());
        assert!(!mods.alt());
        assert!(mods.shift());
    }

    #[test]
    fn test_from_modifier_value_out_of_byte_range() {
        assert_eq!(Modifiers::from_modifier_value(256), Modifiers::NONE);
        assert_eq!(Modifiers::from_modifier_value(257), Modifiers::CTRL);
        // -1 has every bit set
        assert_eq!(Modifiers::from_modifier_value(-1).names(), vec!["Ctrl", "Alt", "Shift"]);
    }

    #[test]
    fn test_names_fixed_order() {
        let mods = Modifiers::from_modifier_value(7);
        assert_eq!(mods.names(), vec!["Ctrl", "Alt", "Shift"]);
        assert_eq!(mods.to_string(), "Ctrl+Alt+Shift");
        assert_eq!(Modifiers::from_modifier_value(6).to_string(), "Alt+Shift");
    }

    #[test]
    fn test_serializes_as_name_list() {
        let json = serde_json::to_string(&Modifiers::from_modifier_value(5)).unwrap();
        assert_eq!(json, r#"["Ctrl","Shift"]"#);
        assert_eq!(serde_json::to_string(&Modifiers::NONE).unwrap(), "[]");
    }
}
