//! Keymap struct holding the decoded entries of one file

use serde::Serialize;

use super::entry::{ActionEntry, KeyEntry, ScriptEntry};
use super::line::EntryKind;

/// A single decoded entry of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Action(ActionEntry),
    Script(ScriptEntry),
    Key(KeyEntry),
}

impl Entry {
    pub fn raw_line(&self) -> &str {
        match self {
            Entry::Action(entry) => &entry.raw_line,
            Entry::Script(entry) => &entry.raw_line,
            Entry::Key(entry) => &entry.raw_line,
        }
    }
}

/// The decoded entries of a keymap, one list per kind in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keymap {
    pub actions: Vec<ActionEntry>,
    pub scripts: Vec<ScriptEntry>,
    pub keys: Vec<KeyEntry>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the list for its kind
    pub fn push(&mut self, entry: Entry) {
        match entry {
            Entry::Action(action) => self.actions.push(action),
            Entry::Script(script) => self.scripts.push(script),
            Entry::Key(key) => self.keys.push(key),
        }
    }

    /// Total number of entries across all kinds
    pub fn len(&self) -> usize {
        self.actions.len() + self.scripts.len() + self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries of one kind
    pub fn count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Action => self.actions.len(),
            EntryKind::Script => self.scripts.len(),
            EntryKind::Key => self.keys.len(),
        }
    }

    /// One-line entry count summary
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} actions, {} scripts, and {} keys.",
            self.actions.len(),
            self.scripts.len(),
            self.keys.len()
        )
    }

    /// Keep only the entries of one kind
    pub fn only(self, kind: EntryKind) -> Self {
        match kind {
            EntryKind::Action => Self {
                actions: self.actions,
                ..Self::default()
            },
            EntryKind::Script => Self {
                scripts: self.scripts,
                ..Self::default()
            },
            EntryKind::Key => Self {
                keys: self.keys,
                ..Self::default()
            },
        }
    }

    /// All shortcuts bound to a command ID, in file order
    pub fn keys_for_command<'a>(
        &'a self,
        action_command_id: &'a str,
    ) -> impl Iterator<Item = &'a KeyEntry> + 'a {
        self.keys
            .iter()
            .filter(move |key| key.action_command_id == action_command_id)
    }

    /// The first custom action registered under a command ID
    pub fn action(&self, action_command_id: &str) -> Option<&ActionEntry> {
        self.actions
            .iter()
            .find(|action| action.action_command_id == action_command_id)
    }

    /// The first script registered under a command ID
    pub fn script(&self, action_command_id: &str) -> Option<&ScriptEntry> {
        self.scripts
            .iter()
            .find(|script| script.action_command_id == action_command_id)
    }
}

impl Extend<Entry> for Keymap {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<Entry> for Keymap {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut keymap = Self::new();
        keymap.extend(iter);
        keymap
    }
}
