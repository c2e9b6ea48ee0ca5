//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire store, repository and view model the way the notes screen does.
//! - Print the seeded grid for quick local sanity checks.

use notes_core::{
    default_log_level, init_logging, LocalNotesApiService, NoteViewModel, NotesAdapter,
    NotesRepository,
};
use std::sync::Arc;

const GRID_SPAN_COUNT: usize = 2;

fn main() {
    if let Ok(log_dir) = std::env::var("NOTES_LOG_DIR") {
        let level =
            std::env::var("NOTES_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = Arc::new(LocalNotesApiService::new());
    let view_model = NoteViewModel::new(NotesRepository::new(store));
    let mut adapter = NotesAdapter::default();
    adapter.collect_from(view_model.notes());

    println!("notes_core version={}", notes_core::core_version());
    println!("notes count={}", adapter.item_count());
    for row in adapter.rows(GRID_SPAN_COUNT) {
        let cells = row
            .iter()
            .map(|note| format!("{:<20} | {}", note.title, note.body))
            .collect::<Vec<_>>();
        println!("{}", cells.join("    "));
    }
}
