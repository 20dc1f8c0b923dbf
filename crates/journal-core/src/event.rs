use serde::{Deserialize, Serialize};

use journal_domain::{BookId, GenreId};

use crate::state::LibraryState;

/// What a dispatched action did to the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    GenreAdded { id: GenreId },
    BookAdded { id: BookId },
    BookUpdated { id: BookId },
    /// An update named a book that does not exist; nothing changed.
    BookUpdateSkipped { id: BookId },
    GenreSelected { id: Option<GenreId> },
    BookSelected { id: Option<BookId> },
    SearchChanged { term: String },
}

impl StoreEvent {
    /// Whether the genre or book collections changed.
    pub fn changes_entities(&self) -> bool {
        matches!(
            self,
            StoreEvent::GenreAdded { .. } | StoreEvent::BookAdded { .. } | StoreEvent::BookUpdated { .. }
        )
    }
}

/// Receives every event together with the state it produced.
///
/// This is where an embedding application can hook persistence, e.g.
/// writing `state.to_json()` out whenever `changes_entities()` is true.
pub trait StoreObserver: Send + Sync {
    fn on_event(&self, event: &StoreEvent, state: &LibraryState);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent, &LibraryState) + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent, state: &LibraryState) {
        self(event, state)
    }
}
