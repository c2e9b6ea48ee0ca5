//! Note store services.
//!
//! # Responsibility
//! - Hold the in-memory note collection behind the `NotesApiService` contract.
//! - Keep repository/UI layers decoupled from the storage shape.

pub mod notes_api_service;
