//! FFI use-case API for the Flutter notes screen.
//!
//! # Responsibility
//! - Expose list/add/remove note calls to Dart via FRB.
//! - Convert store errors into response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls share one process-wide view model.

use log::warn;
use notes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteViewModel,
};
use std::sync::OnceLock;

static SCREEN_VIEW_MODEL: OnceLock<NoteViewModel> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One note card as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub title: String,
    pub body: String,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            title: note.title,
            body: note.body,
        }
    }
}

/// Action response envelope for add/remove calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Note removed by the call, if any.
    pub removed: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, removed: Option<NoteItem>) -> Self {
        Self {
            ok: true,
            removed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            removed: None,
            message: message.into(),
        }
    }
}

/// Returns the current note list as a one-time snapshot.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Later edits are not reflected; call again to refresh.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> Vec<NoteItem> {
    view_model()
        .notes()
        .next()
        .unwrap_or_default()
        .into_iter()
        .map(NoteItem::from)
        .collect()
}

/// Appends one note to the list.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(title: String, body: String) -> NoteActionResponse {
    view_model().add_note(Note::new(title, body));
    NoteActionResponse::success("Note added.", None)
}

/// Removes one note chosen by index, by `(title_key, body_key)` value, or by title.
///
/// The first provided selector wins in that order. Value selection needs
/// both `title_key` and `body_key`.
///
/// # FFI contract
/// - Never panics.
/// - Out-of-range index returns `ok=false`; no match returns `ok=true` with
///   `removed=None`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_remove(
    index: Option<u32>,
    title_key: Option<String>,
    body_key: Option<String>,
    title: Option<String>,
) -> NoteActionResponse {
    let note = match (title_key, body_key) {
        (Some(title), Some(body)) => Some(Note::new(title, body)),
        _ => None,
    };
    let index = index.map(|value| value as usize);

    match view_model().remove_note(index, note, title) {
        Ok(Some(removed)) => NoteActionResponse::success("Note removed.", Some(removed.into())),
        Ok(None) => NoteActionResponse::success("No matching note.", None),
        Err(err) => {
            warn!("event=ffi_notes_remove module=ffi status=error");
            NoteActionResponse::failure(format!("notes_remove failed: {err}"))
        }
    }
}

fn view_model() -> &'static NoteViewModel {
    SCREEN_VIEW_MODEL.get_or_init(NoteViewModel::default)
}
