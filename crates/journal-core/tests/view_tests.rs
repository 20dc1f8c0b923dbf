//! Derived views: genre tree, paths, scopes and search

mod common;

use std::collections::HashSet;

use common::fixtures::{book, genre, load_library};
use journal_core::{
    build_genre_tree, descendant_scope, flatten_tree, genre_path, sample_library, search_books, BinaryCollator,
    FixedClock, LibraryView, UnicodeCollator,
};
use journal_domain::{Book, Chapter, Genre, Section};
use proptest::prelude::*;

// === Tree ===

#[test]
fn test_roots_sorted_by_name() {
    let genres = vec![genre("a", "Z", None), genre("b", "A", None)];
    let tree = build_genre_tree(&genres, &[], &UnicodeCollator);
    let ids: Vec<&str> = tree.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_equal_names_keep_input_order() {
    let genres = vec![genre("first", "Same", None), genre("second", "Same", None)];
    let tree = build_genre_tree(&genres, &[], &BinaryCollator);
    let ids: Vec<&str> = tree.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn test_empty_leaf_has_zero_total() {
    let genres = vec![genre("g", "Lonely", None)];
    let tree = build_genre_tree(&genres, &[], &UnicodeCollator);
    assert_eq!(tree[0].total_books, 0);
    assert!(tree[0].children.is_empty());
}

#[test]
fn test_messy_snapshot_tree() {
    let state = load_library("messy_library.json");
    let tree = build_genre_tree(&state.genres, &state.books, &UnicodeCollator);

    // "art" sorts before "History" case-insensitively; "Stray" has a missing parent
    let names: Vec<&str> = tree.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["art", "History", "Stray"]);
    assert_eq!(tree.iter().map(|n| n.total_books).sum::<usize>(), 2);
    assert!(tree[1].contains("g-ancient"));
}

// === Paths and scopes ===

#[test]
fn test_path_of_root_is_itself() {
    let genres = vec![genre("root", "Root", None), genre("child", "Child", Some("root"))];
    let path: Vec<&str> = genre_path("root", &genres).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(path, vec!["root"]);
}

#[test]
fn test_scope_of_leaf_is_singleton() {
    let genres = vec![genre("root", "Root", None), genre("leaf", "Leaf", Some("root"))];
    assert_eq!(descendant_scope(Some("leaf"), &genres), HashSet::from(["leaf"]));
}

// === Search ===

#[test]
fn test_june_before_january() {
    let books = vec![book("jan", "g", "2024-01-01T00:00:00Z"), book("jun", "g", "2024-06-01T00:00:00Z")];
    let scope = HashSet::from(["g"]);
    let ids: Vec<&str> = search_books(&books, &scope, "").iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["jun", "jan"]);
}

#[test]
fn test_match_in_nested_section_summary() {
    let mut nested = book("nested", "g", "2024-01-01T00:00:00Z");
    nested.chapters = vec![Chapter::new("c1", "Part One", "")
        .with_sections(vec![Section::new("s1", "Notes", "On interface design")])];
    let books = vec![nested, book("plain", "g", "2024-02-01T00:00:00Z")];
    let scope = HashSet::from(["g"]);

    let ids: Vec<&str> = search_books(&books, &scope, "design").iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["nested"]);
}

#[test]
fn test_phrase_across_tags_and_flat_sections() {
    let state = sample_library(&FixedClock::default());
    let scope = descendant_scope(None, &state.genres);
    let ids: Vec<&str> = search_books(&state.books, &scope, "systems thinking cycle planning")
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, vec!["book-routine-architecture"]);
}

#[test]
fn test_messy_snapshot_view() {
    let mut state = load_library("messy_library.json");
    let view = LibraryView::derive(&state, &UnicodeCollator);
    let crumbs: Vec<&str> = view.breadcrumbs.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(crumbs, vec!["History"]);
    assert_eq!(view.visible_books.len(), 1);
    assert_eq!(view.active_book.map(|b| b.id.as_str()), Some("b-rome"));

    // A book whose genre is missing is never in scope, even when its tag matches
    state.selected_genre_id = None;
    state.search_term = "design".into();
    let view = LibraryView::derive(&state, &UnicodeCollator);
    let ids: Vec<&str> = view.visible_books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b-rome"]);

    // +09:00 stamp normalizes to 2024-06-01T00:00Z, newest of all
    state.search_term.clear();
    let view = LibraryView::derive(&state, &UnicodeCollator);
    assert_eq!(view.visible_books.len(), 2);
    assert_eq!(view.visible_books[0].id, "b-stray");
}

// === Properties ===

/// Acyclic genres: each parent points at an earlier genre or at a
/// missing id. Books point at a genre or at a missing id.
fn arb_library() -> impl Strategy<Value = (Vec<Genre>, Vec<Book>)> {
    prop::collection::vec((any::<prop::sample::Index>(), 0u8..4), 1..20).prop_flat_map(|specs| {
        let genres: Vec<Genre> = specs
            .iter()
            .enumerate()
            .map(|(i, (parent, kind))| {
                let g = Genre::new(format!("g{i}"), format!("Genre {}", (i * 7) % 5));
                match *kind {
                    0 if i > 0 => g.with_parent(format!("g{}", parent.index(i))),
                    1 => g.with_parent(format!("missing{i}")),
                    _ => g,
                }
            })
            .collect();
        let count = genres.len();
        let books = prop::collection::vec((0..count + 2, 1u32..28), 0..30).prop_map(move |refs| {
            refs.into_iter()
                .enumerate()
                .map(|(i, (g, day))| book(&format!("b{i}"), &format!("g{g}"), &format!("2024-01-{day:02}T00:00:00Z")))
                .collect::<Vec<_>>()
        });
        (Just(genres), books)
    })
}

proptest! {
    #[test]
    fn prop_root_totals_count_books_with_known_genre((genres, books) in arb_library()) {
        let tree = build_genre_tree(&genres, &books, &UnicodeCollator);
        let known: HashSet<&str> = genres.iter().map(|g| g.id.as_str()).collect();
        let expected = books.iter().filter(|b| known.contains(b.genre_id.as_str())).count();
        prop_assert_eq!(tree.iter().map(|n| n.total_books).sum::<usize>(), expected);
    }

    #[test]
    fn prop_node_total_is_direct_plus_children((genres, books) in arb_library()) {
        let tree = build_genre_tree(&genres, &books, &UnicodeCollator);
        let flat = flatten_tree(&tree);
        prop_assert_eq!(flat.len(), genres.len());
        for (_, node) in flat {
            let children: usize = node.children.iter().map(|c| c.total_books).sum();
            prop_assert_eq!(node.total_books, node.books.len() + children);
        }
    }

    #[test]
    fn prop_path_is_root_first_without_duplicates((genres, _books) in arb_library()) {
        for g in &genres {
            let path = genre_path(&g.id, &genres);
            prop_assert_eq!(path.last().map(|p| p.id.as_str()), Some(g.id.as_str()));
            let first = path[0];
            prop_assert!(first.parent_id.as_deref().map_or(true, |p| !p.starts_with('g')));
            let unique: HashSet<&str> = path.iter().map(|p| p.id.as_str()).collect();
            prop_assert_eq!(unique.len(), path.len());
        }
    }

    #[test]
    fn prop_unselected_scope_is_every_genre((genres, _books) in arb_library()) {
        let scope = descendant_scope(None, &genres);
        let all: HashSet<&str> = genres.iter().map(|g| g.id.as_str()).collect();
        prop_assert_eq!(scope, all);
    }

    #[test]
    fn prop_scope_contains_selected_subtree((genres, books) in arb_library()) {
        let tree = build_genre_tree(&genres, &books, &UnicodeCollator);
        for (_, node) in flatten_tree(&tree) {
            let scope = descendant_scope(Some(node.id()), &genres);
            let subtree: HashSet<&str> = flatten_tree(std::slice::from_ref(node)).into_iter().map(|(_, n)| n.id()).collect();
            prop_assert_eq!(scope, subtree);
        }
    }

    #[test]
    fn prop_search_is_sorted_newest_first((genres, books) in arb_library()) {
        let scope = descendant_scope(None, &genres);
        let results = search_books(&books, &scope, "");
        prop_assert!(results.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
    }
}
