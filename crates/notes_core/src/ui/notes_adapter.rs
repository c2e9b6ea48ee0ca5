//! List adapter backing the notes grid.

use crate::model::note::Note;
use crate::repo::notes_repository::NotesFlow;

/// Items currently displayed by the notes grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesAdapter {
    notes: Vec<Note>,
}

impl NotesAdapter {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Replaces the displayed items.
    pub fn update_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Collects every emission of `flow` into the adapter.
    pub fn collect_from(&mut self, flow: NotesFlow) {
        for notes in flow {
            self.update_notes(notes);
        }
    }

    pub fn item_count(&self) -> usize {
        self.notes.len()
    }

    pub fn item(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    /// Groups items into grid rows of `span_count` columns.
    ///
    /// A `span_count` of zero is treated as one column.
    pub fn rows(&self, span_count: usize) -> Vec<Vec<&Note>> {
        self.notes
            .chunks(span_count.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }
}
