//! Core logic for the notes screen.
//! The in-memory note store is the single source of truth for note state.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::Note;
pub use repo::notes_repository::{NotesFlow, NotesRepository};
pub use service::notes_api_service::{
    generate_default_notes, LocalNotesApiService, NotesApiService, RemovalSelector, StoreError,
    StoreResult,
};
pub use ui::note_view_model::NoteViewModel;
pub use ui::notes_adapter::NotesAdapter;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
