//! The library state held by the store.

use serde::{Deserialize, Serialize};

use journal_domain::{Book, BookId, Genre, GenreId};

use crate::error::Result;

/// Authoritative genres and books plus browsing state.
///
/// Snapshots of this value are handed out as `Arc<LibraryState>`; the
/// store replaces it copy-on-write, so a held snapshot never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryState {
    pub genres: Vec<Genre>,
    pub books: Vec<Book>,
    #[serde(default)]
    pub selected_genre_id: Option<GenreId>,
    #[serde(default)]
    pub selected_book_id: Option<BookId>,
    #[serde(default)]
    pub search_term: String,
}

impl LibraryState {
    pub fn new(genres: Vec<Genre>, books: Vec<Book>) -> Self {
        Self {
            genres,
            books,
            ..Self::default()
        }
    }

    /// Get a genre by id
    pub fn genre(&self, id: &str) -> Option<&Genre> {
        self.genres.iter().find(|g| g.id == id)
    }

    /// Get a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// The selected book, if it exists.
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected_book_id.as_deref().and_then(|id| self.book(id))
    }

    /// The selected genre, if it exists.
    pub fn selected_genre(&self) -> Option<&Genre> {
        self.selected_genre_id.as_deref().and_then(|id| self.genre(id))
    }

    /// Load a state snapshot from JSON
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize the state to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
