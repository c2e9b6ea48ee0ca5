//! In-memory note store.
//!
//! # Responsibility
//! - Own the authoritative ordered collection of notes for one screen.
//! - Provide add/remove/list primitives to the repository layer.
//!
//! # Invariants
//! - Insertion order is preserved and duplicate values are allowed.
//! - The collection is only mutated through `add_note`/`remove_note`;
//!   readers always receive an owned snapshot.
//! - Removal touches at most one element, the first match in insertion order.
//! - A fresh store is never empty: it starts from `generate_default_notes()`.

use crate::model::note::Note;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index-based removal pointed past the end of the collection.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for {len} note(s)")
            }
        }
    }
}

impl Error for StoreError {}

/// Criterion used to pick the note to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalSelector {
    /// Position in the collection.
    ByIndex(usize),
    /// First note structurally equal to the value.
    ByValue(Note),
    /// First note whose title equals the string.
    ByTitle(String),
}

impl RemovalSelector {
    /// Builds a selector from the three optional removal inputs used by UI callers.
    ///
    /// Precedence is index, then value, then title. Returns `None` when all
    /// three are absent.
    pub fn from_parts(
        index: Option<usize>,
        note: Option<Note>,
        title: Option<String>,
    ) -> Option<Self> {
        index
            .map(Self::ByIndex)
            .or_else(|| note.map(Self::ByValue))
            .or_else(|| title.map(Self::ByTitle))
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::ByIndex(_) => "index",
            Self::ByValue(_) => "value",
            Self::ByTitle(_) => "title",
        }
    }
}

/// Store contract consumed by the repository layer.
pub trait NotesApiService: Send + Sync {
    /// Returns the current collection, in insertion order.
    fn get_all_notes(&self) -> Vec<Note>;

    /// Appends `note` at the end of the collection.
    fn add_note(&self, note: Note);

    /// Removes at most one note chosen by `selector`.
    ///
    /// Returns the removed note, or `None` when value/title selection
    /// matched nothing.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `ByIndex` is past the end.
    fn remove_note(&self, selector: RemovalSelector) -> StoreResult<Option<Note>>;
}

/// Mutex-guarded in-memory implementation of [`NotesApiService`].
#[derive(Debug)]
pub struct LocalNotesApiService {
    notes: Mutex<Vec<Note>>,
}

impl LocalNotesApiService {
    /// Creates a store seeded with the default starter notes.
    pub fn new() -> Self {
        Self::with_notes(generate_default_notes())
    }

    /// Creates a store seeded with a caller-provided collection.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        info!(
            "event=store_init module=store status=ok count={}",
            notes.len()
        );
        Self {
            notes: Mutex::new(notes),
        }
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every edit is a single Vec call, so a poisoned guard still holds a
    // consistent collection.
    fn lock(&self) -> MutexGuard<'_, Vec<Note>> {
        self.notes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LocalNotesApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesApiService for LocalNotesApiService {
    fn get_all_notes(&self) -> Vec<Note> {
        self.lock().clone()
    }

    fn add_note(&self, note: Note) {
        let mut notes = self.lock();
        notes.push(note);
        debug!(
            "event=note_add module=store status=ok count={}",
            notes.len()
        );
    }

    fn remove_note(&self, selector: RemovalSelector) -> StoreResult<Option<Note>> {
        let kind = selector.kind();
        let mut notes = self.lock();
        let position = match selector {
            RemovalSelector::ByIndex(index) => {
                if index >= notes.len() {
                    warn!(
                        "event=note_remove module=store status=error selector=index index={} count={}",
                        index,
                        notes.len()
                    );
                    return Err(StoreError::IndexOutOfRange {
                        index,
                        len: notes.len(),
                    });
                }
                Some(index)
            }
            RemovalSelector::ByValue(note) => notes.iter().position(|item| *item == note),
            RemovalSelector::ByTitle(title) => notes.iter().position(|item| item.has_title(&title)),
        };

        let Some(position) = position else {
            debug!(
                "event=note_remove module=store status=no_match selector={} count={}",
                kind,
                notes.len()
            );
            return Ok(None);
        };

        let removed = notes.remove(position);
        debug!(
            "event=note_remove module=store status=ok selector={} index={} count={}",
            kind,
            position,
            notes.len()
        );
        Ok(Some(removed))
    }
}

/// Produces the starter notes every new store is seeded with.
///
/// The set is fixed: it is non-empty and identical on every call.
pub fn generate_default_notes() -> Vec<Note> {
    [
        ("Groceries", "Milk, eggs, bread, and a bag of apples."),
        ("Call the plumber", "The kitchen sink is leaking again."),
        ("Book idea", "A lighthouse keeper who collects lost letters."),
        ("Gym", "Legs on Monday, back on Wednesday, run on Friday."),
        ("Birthday", "Order the cake before the 12th."),
        ("Reading list", "Finish the last two chapters this weekend."),
        ("Garden", "Water the tomatoes and repot the basil."),
        ("Trip", "Check train times and reserve the hotel."),
        ("Recipe", "Pumpkin soup: roast first, then blend with stock."),
        ("Meeting notes", "Agree on the release date and who writes the notes."),
    ]
    .into_iter()
    .map(|(title, body)| Note::new(title, body))
    .collect()
}
