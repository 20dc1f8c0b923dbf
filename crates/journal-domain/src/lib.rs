//! Domain types for the book journal
//!
//! This crate provides the entity models the journal is built from:
//! - Genre: a node in the user's classification forest
//! - Book: a journal entry for one book, attached to exactly one genre
//! - Chapter, Section: free-form notes inside a book
//! - NewBook, BookUpdate: payloads for creating and editing books
//! - Validation: required-field checks for the input boundary

pub mod book;
pub mod content;
pub mod genre;
pub mod update;
pub mod validation;

pub use book::*;
pub use content::*;
pub use genre::*;
pub use update::*;
pub use validation::*;
