//! Domain model for the notes screen.
//!
//! # Responsibility
//! - Define the value types shared by the store, repository and UI layers.
//!
//! # Invariants
//! - Notes carry no identity; equality is structural.

pub mod note;
