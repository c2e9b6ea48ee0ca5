//! UI-facing layers of the notes screen.
//!
//! # Responsibility
//! - Bridge the repository to screen code through a view model.
//! - Hold the items a list/grid widget renders.

pub mod note_view_model;
pub mod notes_adapter;
