//! State transitions for the library store
//!
//! Each action is a plain value; [`Action::apply`] is the reducer. Fresh
//! ids and timestamps come from the store environment, nothing else is
//! read from outside the state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use journal_domain::{Book, BookId, BookUpdate, Genre, GenreId, NewBook};

use crate::content::{materialize_content, tidy_tags};
use crate::event::StoreEvent;
use crate::state::LibraryState;
use crate::store::StoreEnv;

/// Actions that can be applied to the library state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Add a genre and select it
    AddGenre {
        name: String,
        parent_id: Option<GenreId>,
    },

    /// Add a book, select it and its genre
    AddBook(NewBook),

    /// Edit a book; unknown ids are ignored
    UpdateBook { id: BookId, update: BookUpdate },

    SelectGenre(Option<GenreId>),

    SelectBook(Option<BookId>),

    SetSearch(String),
}

impl Action {
    /// Apply the action to the given state
    pub fn apply(self, state: &mut LibraryState, env: &StoreEnv) -> StoreEvent {
        match self {
            Action::AddGenre { name, parent_id } => StoreEvent::GenreAdded {
                id: add_genre(state, env, &name, parent_id),
            },
            Action::AddBook(input) => StoreEvent::BookAdded {
                id: add_book(state, env, input),
            },
            Action::UpdateBook { id, update } => {
                if update_book(state, env, &id, update) {
                    StoreEvent::BookUpdated { id }
                } else {
                    StoreEvent::BookUpdateSkipped { id }
                }
            }
            Action::SelectGenre(id) => {
                state.selected_genre_id = id.clone();
                StoreEvent::GenreSelected { id }
            }
            Action::SelectBook(id) => {
                state.selected_book_id = id.clone();
                StoreEvent::BookSelected { id }
            }
            Action::SetSearch(term) => {
                state.search_term = term.clone();
                StoreEvent::SearchChanged { term }
            }
        }
    }
}

pub(crate) fn add_genre(
    state: &mut LibraryState,
    env: &StoreEnv,
    name: &str,
    parent_id: Option<GenreId>,
) -> GenreId {
    let genre = Genre {
        id: env.ids.next_id(),
        name: name.trim().to_string(),
        parent_id,
    };
    let id = genre.id.clone();
    state.genres.push(genre);
    state.selected_genre_id = Some(id.clone());
    id
}

pub(crate) fn add_book(state: &mut LibraryState, env: &StoreEnv, input: NewBook) -> BookId {
    let id = env.ids.next_id();
    let timestamp = env.clock.now();
    let chapters = materialize_content(input.content, env.ids.as_ref(), &env.config.labels);
    let cover_color = input
        .cover_color
        .unwrap_or_else(|| env.config.cover_color(state.books.len()).to_string());

    let book = Book {
        id: id.clone(),
        title: input.title.trim().to_string(),
        author: input.author.trim().to_string(),
        genre_id: input.genre_id,
        description: input.description.trim().to_string(),
        tags: tidy_tags(&input.tags),
        chapters,
        created_at: timestamp,
        updated_at: timestamp,
        cover_color,
    };

    state.selected_genre_id = Some(book.genre_id.clone());
    state.selected_book_id = Some(id.clone());
    state.books.push(book);
    id
}

/// Returns false when no book has the given id.
pub(crate) fn update_book(state: &mut LibraryState, env: &StoreEnv, id: &str, update: BookUpdate) -> bool {
    let Some(book) = state.books.iter_mut().find(|b| b.id == id) else {
        debug!(book_id = id, "update for unknown book ignored");
        return false;
    };

    let BookUpdate {
        title,
        author,
        genre_id,
        description,
        tags,
        chapters,
        cover_color,
    } = update;

    if let Some(title) = title {
        book.title = title;
    }
    if let Some(author) = author {
        book.author = author;
    }
    if let Some(genre_id) = genre_id {
        book.genre_id = genre_id;
    }
    if let Some(description) = description {
        book.description = description;
    }
    if let Some(tags) = tags {
        book.tags = tags;
    }
    if let Some(chapters) = chapters {
        book.chapters = chapters;
    }
    if let Some(cover_color) = cover_color {
        book.cover_color = cover_color;
    }
    book.updated_at = env.clock.now();
    true
}
