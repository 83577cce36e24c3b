//! Section IDs and their display names

/// Known section IDs
const SECTIONS: &[(i64, &str)] = &[
    (0, "Main"),
    (1, "Action stays invisible but is kept"),
    (100, "Main (alt recording)"),
    (32060, "MIDI Editor"),
    (32061, "MIDI Event List Editor"),
    (32062, "MIDI Inline Editor"),
    (32063, "Media Explorer"),
];

/// Section IDs that mark a KEY entry as a global shortcut
pub const GLOBAL_SECTIONS: [i64; 2] = [102, 103];

/// Look up a section name, if the ID is known
pub fn known_section(section_id: i64) -> Option<&'static str> {
    SECTIONS
        .iter()
        .find(|(id, _)| *id == section_id)
        .map(|(_, name)| *name)
}

/// Resolve a section ID to its name, or a placeholder carrying the ID
pub fn section_name(section_id: i64) -> String {
    match known_section(section_id) {
        Some(name) => name.to_string(),
        None => format!("Unknown Section ({})", section_id),
    }
}

/// Whether a KEY entry in this section is a global shortcut
pub fn is_global_section(section_id: i64) -> bool {
    GLOBAL_SECTIONS.contains(&section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sections() {
        assert_eq!(section_name(0), "Main");
        assert_eq!(section_name(100), "Main (alt recording)");
        assert_eq!(section_name(32060), "MIDI Editor");
        assert_eq!(section_name(32063), "Media Explorer");
    }

    #[test]
    fn test_unknown_section_placeholder() {
        assert_eq!(section_name(102), "Unknown Section (102)");
        assert_eq!(section_name(-5), "Unknown Section (-5)");
        assert_eq!(known_section(42), None);
    }

    #[test]
    fn test_global_sections() {
        assert!(is_global_section(102));
        assert!(is_global_section(103));
        assert!(!is_global_section(0));
        assert!(!is_global_section(101));
    }
}
