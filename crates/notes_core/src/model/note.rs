//! Note value type.
//!
//! # Responsibility
//! - Pair a title with a body as one immutable value.
//!
//! # Invariants
//! - Two notes are equal iff both `title` and `body` match.
//! - Fields are never mutated after construction; edits produce new values.

use serde::{Deserialize, Serialize};

/// One note shown as a card in the notes grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Card headline.
    pub title: String,
    /// Card message text.
    pub body: String,
}

impl Note {
    /// Creates a note from title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns whether this note has the given title.
    pub fn has_title(&self, title: &str) -> bool {
        self.title == title
    }
}
