//! Notes repository and its one-shot list flow.
//!
//! # Responsibility
//! - Expose the store to UI-facing layers as a single-emission list flow.
//! - Pass add/remove calls through to the injected store unchanged.
//!
//! # Invariants
//! - A `NotesFlow` captures its snapshot when it is created, yields it once,
//!   then stays exhausted.

use crate::model::note::Note;
use crate::service::notes_api_service::{
    LocalNotesApiService, NotesApiService, RemovalSelector, StoreResult,
};
use std::iter::FusedIterator;
use std::sync::Arc;

/// One-shot producer of a notes snapshot.
#[derive(Debug, Clone)]
#[must_use = "a notes flow delivers nothing unless it is collected"]
pub struct NotesFlow {
    snapshot: Option<Vec<Note>>,
}

impl NotesFlow {
    fn new(snapshot: Vec<Note>) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Returns whether the snapshot was already delivered.
    pub fn is_completed(&self) -> bool {
        self.snapshot.is_none()
    }
}

impl Iterator for NotesFlow {
    type Item = Vec<Note>;

    fn next(&mut self) -> Option<Self::Item> {
        self.snapshot.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.snapshot.is_some());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NotesFlow {}

impl FusedIterator for NotesFlow {}

/// Repository wrapper over a shared note store.
#[derive(Clone)]
pub struct NotesRepository {
    api: Arc<dyn NotesApiService>,
}

impl NotesRepository {
    /// Creates a repository over the provided store.
    pub fn new(api: Arc<dyn NotesApiService>) -> Self {
        Self { api }
    }

    /// Subscribes to the note list.
    ///
    /// The snapshot is taken now; mutations made after this call are not
    /// visible through the returned flow.
    pub fn notes(&self) -> NotesFlow {
        NotesFlow::new(self.api.get_all_notes())
    }

    /// Adds a note to the store.
    pub fn add_note(&self, note: Note) {
        self.api.add_note(note);
    }

    /// Removes one note from the store.
    ///
    /// Returns store-level errors unchanged.
    pub fn remove_note(&self, selector: RemovalSelector) -> StoreResult<Option<Note>> {
        self.api.remove_note(selector)
    }
}

impl Default for NotesRepository {
    fn default() -> Self {
        Self::new(Arc::new(LocalNotesApiService::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::NotesRepository;
    use crate::model::note::Note;
    use crate::service::notes_api_service::{
        NotesApiService, RemovalSelector, StoreError, StoreResult,
    };
    use std::sync::{Arc, Mutex};

    /// Store double that records every call.
    #[derive(Default)]
    struct RecordingApi {
        listed: Vec<Note>,
        added: Mutex<Vec<Note>>,
        removed: Mutex<Vec<RemovalSelector>>,
    }

    impl NotesApiService for RecordingApi {
        fn get_all_notes(&self) -> Vec<Note> {
            self.listed.clone()
        }

        fn add_note(&self, note: Note) {
            self.added.lock().unwrap().push(note);
        }

        fn remove_note(&self, selector: RemovalSelector) -> StoreResult<Option<Note>> {
            self.removed.lock().unwrap().push(selector.clone());
            match selector {
                RemovalSelector::ByIndex(index) => Err(StoreError::IndexOutOfRange {
                    index,
                    len: self.listed.len(),
                }),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn flow_emits_all_notes_from_the_store_once() {
        let expected = vec![Note::new("Titre1", "msg1"), Note::new("Titre2", "msg2")];
        let api = Arc::new(RecordingApi {
            listed: expected.clone(),
            ..RecordingApi::default()
        });
        let repo = NotesRepository::new(api);

        let mut flow = repo.notes();
        assert_eq!(flow.len(), 1);
        assert_eq!(flow.next(), Some(expected));
        assert!(flow.is_completed());
        assert_eq!(flow.next(), None);
    }

    #[test]
    fn add_note_calls_store_exactly_once() {
        let api = Arc::new(RecordingApi::default());
        let repo = NotesRepository::new(api.clone());

        repo.add_note(Note::new("Titre3", "msg3"));

        assert_eq!(
            *api.added.lock().unwrap(),
            vec![Note::new("Titre3", "msg3")]
        );
    }

    #[test]
    fn remove_note_forwards_selector_and_error() {
        let api = Arc::new(RecordingApi {
            listed: vec![Note::new("Titre1", "msg1"), Note::new("Titre2", "msg2")],
            ..RecordingApi::default()
        });
        let repo = NotesRepository::new(api.clone());

        let err = repo.remove_note(RemovalSelector::ByIndex(2)).unwrap_err();

        assert_eq!(err, StoreError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(
            *api.removed.lock().unwrap(),
            vec![RemovalSelector::ByIndex(2)]
        );
    }
}
