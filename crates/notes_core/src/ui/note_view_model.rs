//! View model for the notes screen.
//!
//! # Responsibility
//! - Expose the repository's list flow and mutators to screen code.
//! - Accept the screen's optional index/note/title removal inputs.
//!
//! # Invariants
//! - Holds no note state of its own.

use crate::model::note::Note;
use crate::repo::notes_repository::{NotesFlow, NotesRepository};
use crate::service::notes_api_service::{RemovalSelector, StoreResult};

/// Screen-level facade over an injected [`NotesRepository`].
#[derive(Clone, Default)]
pub struct NoteViewModel {
    repository: NotesRepository,
}

impl NoteViewModel {
    /// Creates a view model over the provided repository.
    pub fn new(repository: NotesRepository) -> Self {
        Self { repository }
    }

    /// Subscribes to the note list.
    pub fn notes(&self) -> NotesFlow {
        self.repository.notes()
    }

    /// Adds a note to the list.
    pub fn add_note(&self, note: Note) {
        self.repository.add_note(note);
    }

    /// Removes one note using the first provided input: index, note, then title.
    ///
    /// All inputs absent is a no-op returning `Ok(None)`.
    pub fn remove_note(
        &self,
        index: Option<usize>,
        note: Option<Note>,
        title: Option<String>,
    ) -> StoreResult<Option<Note>> {
        match RemovalSelector::from_parts(index, note, title) {
            Some(selector) => self.repository.remove_note(selector),
            None => Ok(None),
        }
    }
}
