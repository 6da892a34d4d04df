use crate::error::{GameError, Result};
use std::collections::HashMap;

const SEPARATOR: char = ':';

/// Free-text notes keyed by the exact game name the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMap {
    notes: HashMap<String, String>,
}

impl NoteMap {
    /// Builds the map from `"Name:Note"` entries. Every entry must contain
    /// exactly one `:`; a later entry for the same name replaces an earlier one.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut notes = HashMap::with_capacity(entries.len());

        for entry in entries {
            let entry = entry.as_ref();
            let mut parts = entry.split(SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(note), None) => {
                    notes.insert(name.to_string(), note.to_string());
                }
                _ => return Err(GameError::InvalidNote(entry.to_string())),
            }
        }

        Ok(Self { notes })
    }

    pub fn get(&self, game: &str) -> Option<&str> {
        self.notes.get(game).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
