//! Everything a renderer needs from one state snapshot.

use tracing::trace;

use journal_domain::{Book, Genre};

use crate::collation::Collator;
use crate::hierarchy::{descendant_scope, genre_path};
use crate::search::search_books;
use crate::state::LibraryState;
use crate::tree::{build_genre_tree, GenreTreeNode};

/// Derived views over a [`LibraryState`], recomputed from scratch.
#[derive(Debug, Clone)]
pub struct LibraryView<'a> {
    pub tree: Vec<GenreTreeNode<'a>>,
    /// Path to the selected genre; empty without a selection
    pub breadcrumbs: Vec<&'a Genre>,
    /// Books in the selected genre's subtree that match the search term
    pub visible_books: Vec<&'a Book>,
    pub active_book: Option<&'a Book>,
}

impl<'a> LibraryView<'a> {
    pub fn derive(state: &'a LibraryState, collator: &dyn Collator) -> Self {
        let selected = state.selected_genre_id.as_deref();
        let scope = descendant_scope(selected, &state.genres);

        let view = Self {
            tree: build_genre_tree(&state.genres, &state.books, collator),
            breadcrumbs: selected.map(|id| genre_path(id, &state.genres)).unwrap_or_default(),
            visible_books: search_books(&state.books, &scope, &state.search_term),
            active_book: state.selected_book(),
        };
        trace!(
            visible = view.visible_books.len(),
            depth = view.breadcrumbs.len(),
            "library view derived"
        );
        view
    }

    /// Whether the tree row for `id` should start expanded: it is the
    /// selected genre or one of its ancestors.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.breadcrumbs.iter().any(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::collation::UnicodeCollator;
    use crate::sample::sample_library;

    #[test]
    fn default_sample_view() {
        let state = sample_library(&FixedClock::default());
        let view = LibraryView::derive(&state, &UnicodeCollator);

        assert_eq!(view.tree.len(), 2);
        assert!(view.breadcrumbs.is_empty());
        assert_eq!(view.visible_books.len(), 3);
        assert_eq!(view.active_book.map(|b| b.id.as_str()), Some("book-invisible-archive"));
    }

    #[test]
    fn selection_scopes_and_expands() {
        let mut state = sample_library(&FixedClock::default());
        state.selected_genre_id = Some("genre-nonfiction".into());
        state.search_term = "SYSTEMS".into();
        let view = LibraryView::derive(&state, &UnicodeCollator);

        let names: Vec<&str> = view.breadcrumbs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Non-Fiction"]);
        let ids: Vec<&str> = view.visible_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"book-interface-atlas"));
        assert!(ids.contains(&"book-routine-architecture"));
        assert!(view.is_expanded("genre-nonfiction"));
        assert!(!view.is_expanded("genre-fiction"));
    }

    #[test]
    fn stale_book_selection_yields_no_active_book() {
        let mut state = sample_library(&FixedClock::default());
        state.selected_book_id = Some("deleted".into());
        assert!(LibraryView::derive(&state, &UnicodeCollator).active_book.is_none());
    }
}
