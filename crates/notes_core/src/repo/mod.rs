//! Repository layer between the note store and UI-facing callers.
//!
//! # Responsibility
//! - Turn store reads into one-shot list flows.
//! - Keep the store implementation injectable behind `NotesApiService`.

pub mod notes_repository;
