//! Search query validation.
//!
//! A query only triggers a search when its trimmed form has at least
//! [`MIN_QUERY_CHARS`] characters and the keystroke that produced it was not a
//! deletion. Erasing text therefore never fires a fresh search by itself.

use crossterm::event::KeyCode;

/// Minimum trimmed query length, in characters.
pub const MIN_QUERY_CHARS: usize = 2;

/// The last key pressed in the search box, as far as search gating cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastKey {
    /// Nothing typed yet.
    #[default]
    None,
    /// Backspace or Delete.
    Deletion,
    /// Any other key.
    Other,
}

impl LastKey {
    pub fn is_deletion(self) -> bool {
        self == LastKey::Deletion
    }
}

impl From<KeyCode> for LastKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Backspace | KeyCode::Delete => LastKey::Deletion,
            _ => LastKey::Other,
        }
    }
}

/// A trimmed query that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate raw search box text against the last key pressed.
    ///
    /// Returns `None` if the trimmed text is too short or `last_key` is a deletion.
    pub fn parse(raw: &str, last_key: LastKey) -> Option<Self> {
        if last_key.is_deletion() {
            return None;
        }
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
