//! The library store
//!
//! [`LibraryStore`] owns the authoritative [`LibraryState`] and applies
//! actions to it one at a time. Readers take an `Arc` snapshot; a dispatch
//! that happens while a snapshot is held clones the state first, so the
//! snapshot stays exactly as it was.

use std::sync::Arc;

use tracing::debug;

use journal_domain::{
    has_errors, validate_genre_name, validate_new_book, BookId, BookUpdate, Chapter, GenreId, NewBook, Section,
    ValidationError, ValidationSeverity,
};

use crate::action::{self, Action};
use crate::clock::{Clock, SystemClock};
use crate::config::JournalConfig;
use crate::error::{JournalError, Result};
use crate::event::{StoreEvent, StoreObserver};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::state::LibraryState;

/// Strategies the reducer draws on: id source, clock and configuration.
#[derive(Debug)]
pub struct StoreEnv {
    pub ids: Box<dyn IdGenerator>,
    pub clock: Box<dyn Clock>,
    pub config: JournalConfig,
}

impl Default for StoreEnv {
    fn default() -> Self {
        Self {
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
            config: JournalConfig::default(),
        }
    }
}

impl StoreEnv {
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_config(mut self, config: JournalConfig) -> Self {
        self.config = config;
        self
    }
}

/// Single owner of the library state.
pub struct LibraryStore {
    state: Arc<LibraryState>,
    env: StoreEnv,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl std::fmt::Debug for LibraryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryStore")
            .field("genres", &self.state.genres.len())
            .field("books", &self.state.books.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl LibraryStore {
    /// Create an empty store
    pub fn new(env: StoreEnv) -> Self {
        Self::with_state(LibraryState::default(), env)
    }

    /// Create a store seeded with existing state
    pub fn with_state(state: LibraryState, env: StoreEnv) -> Self {
        Self {
            state: Arc::new(state),
            env,
            observers: Vec::new(),
        }
    }

    /// Borrow the current state
    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    /// An immutable snapshot of the current state
    pub fn snapshot(&self) -> Arc<LibraryState> {
        Arc::clone(&self.state)
    }

    pub fn env(&self) -> &StoreEnv {
        &self.env
    }

    /// Register an observer called after every dispatch
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply an action and notify observers
    pub fn dispatch(&mut self, action: Action) -> StoreEvent {
        let event = action.apply(Arc::make_mut(&mut self.state), &self.env);
        self.publish(&event);
        event
    }

    fn publish(&self, event: &StoreEvent) {
        debug!(?event, "store event");
        for observer in &self.observers {
            observer.on_event(event, &self.state);
        }
    }

    /// Add a genre, select it and return its id
    pub fn add_genre(&mut self, name: &str, parent_id: Option<GenreId>) -> GenreId {
        let id = action::add_genre(Arc::make_mut(&mut self.state), &self.env, name, parent_id);
        self.publish(&StoreEvent::GenreAdded { id: id.clone() });
        id
    }

    /// Add a book, select it and its genre, and return its id
    pub fn add_book(&mut self, input: NewBook) -> BookId {
        let id = action::add_book(Arc::make_mut(&mut self.state), &self.env, input);
        self.publish(&StoreEvent::BookAdded { id: id.clone() });
        id
    }

    /// Apply a partial edit. Returns false when the id is unknown.
    pub fn update_book(&mut self, id: &str, update: BookUpdate) -> bool {
        self.dispatch(Action::UpdateBook {
            id: id.to_string(),
            update,
        })
        .changes_entities()
    }

    pub fn select_genre(&mut self, id: Option<GenreId>) {
        self.dispatch(Action::SelectGenre(id));
    }

    pub fn select_book(&mut self, id: Option<BookId>) {
        self.dispatch(Action::SelectBook(id));
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(Action::SetSearch(term.into()));
    }

    /// Validate, then add a genre.
    ///
    /// The store accepts any name; callers that want the form rules
    /// (non-empty name, existing parent) go through here.
    pub fn checked_add_genre(&mut self, name: &str, parent_id: Option<GenreId>) -> Result<GenreId> {
        let errors = validate_genre_name(name);
        if has_errors(&errors) {
            return Err(JournalError::Validation(join_messages(&errors)));
        }
        if let Some(parent) = parent_id.as_deref() {
            if self.state.genre(parent).is_none() {
                return Err(JournalError::Validation(format!("unknown parent genre {parent:?}")));
            }
        }
        Ok(self.add_genre(name, parent_id))
    }

    /// Validate, then add a book. The genre must exist.
    pub fn checked_add_book(&mut self, input: NewBook) -> Result<BookId> {
        let errors = validate_new_book(&input);
        if has_errors(&errors) {
            return Err(JournalError::Validation(join_messages(&errors)));
        }
        if self.state.genre(&input.genre_id).is_none() {
            return Err(JournalError::Validation(format!("unknown genre {:?}", input.genre_id)));
        }
        Ok(self.add_book(input))
    }

    /// An empty chapter holding one empty section, both with fresh ids.
    pub fn new_draft_chapter(&self) -> Chapter {
        Chapter::new(self.env.ids.next_id(), "", "").with_sections(vec![self.new_draft_section()])
    }

    /// An empty section with a fresh id, for editors.
    pub fn new_draft_section(&self) -> Section {
        Section::new(self.env.ids.next_id(), "", "")
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .filter(|e| e.severity == ValidationSeverity::Error)
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
