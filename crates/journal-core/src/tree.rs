//! Genre tree built from the flat genre list
//!
//! Every node carries the books assigned directly to it and the recursive
//! book count of its subtree. Siblings are ordered by name.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use tracing::{debug, trace};

use journal_domain::{Book, Genre};

use crate::collation::Collator;

/// A genre with its children and books.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreTreeNode<'a> {
    pub genre: &'a Genre,
    pub children: Vec<GenreTreeNode<'a>>,
    /// Books whose genre is exactly this one
    pub books: Vec<&'a Book>,
    /// Direct books plus the totals of all children
    pub total_books: usize,
}

impl<'a> GenreTreeNode<'a> {
    pub fn id(&self) -> &'a str {
        &self.genre.id
    }

    pub fn name(&self) -> &'a str {
        &self.genre.name
    }

    /// Whether this node or any descendant has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Find the node with the given id in this subtree.
    pub fn find(&self, id: &str) -> Option<&GenreTreeNode<'a>> {
        if self.genre.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Build the genre forest.
///
/// A genre whose parent is missing becomes a root. A book whose genre is
/// missing is left out. Genres caught in a parent cycle are never reached
/// from a root and do not appear.
pub fn build_genre_tree<'a>(
    genres: &'a [Genre],
    books: &'a [Book],
    collator: &dyn Collator,
) -> Vec<GenreTreeNode<'a>> {
    let known: HashSet<&str> = genres.iter().map(|g| g.id.as_str()).collect();

    let mut books_by_genre: HashMap<&str, Vec<&'a Book>> = HashMap::new();
    for book in books {
        if known.contains(book.genre_id.as_str()) {
            books_by_genre.entry(book.genre_id.as_str()).or_default().push(book);
        } else {
            debug!(book_id = %book.id, genre_id = %book.genre_id, "book has unknown genre, left out of tree");
        }
    }

    let mut roots = Vec::new();
    let mut children_of: HashMap<&str, Vec<&'a Genre>> = HashMap::new();
    for genre in genres {
        match genre.parent_id.as_deref() {
            Some(parent) if known.contains(parent) => children_of.entry(parent).or_default().push(genre),
            _ => roots.push(genre),
        }
    }

    let mut expanded = HashSet::new();
    let mut nodes: Vec<GenreTreeNode<'a>> = roots
        .into_iter()
        .filter_map(|genre| build_node(genre, &children_of, &books_by_genre, &mut expanded, collator))
        .collect();
    sort_siblings(&mut nodes, collator);

    trace!(genres = genres.len(), roots = nodes.len(), "genre tree rebuilt");
    nodes
}

fn build_node<'a>(
    genre: &'a Genre,
    children_of: &HashMap<&str, Vec<&'a Genre>>,
    books_by_genre: &HashMap<&str, Vec<&'a Book>>,
    expanded: &mut HashSet<&'a str>,
    collator: &dyn Collator,
) -> Option<GenreTreeNode<'a>> {
    // Duplicate ids would otherwise be expanded twice
    if !expanded.insert(genre.id.as_str()) {
        return None;
    }

    let mut children = Vec::new();
    for &child in children_of.get(genre.id.as_str()).into_iter().flatten() {
        if let Some(node) = build_node(child, children_of, books_by_genre, expanded, collator) {
            children.push(node);
        }
    }
    sort_siblings(&mut children, collator);

    let books = books_by_genre.get(genre.id.as_str()).cloned().unwrap_or_default();
    let total_books = books.len() + children.iter().map(|c| c.total_books).sum::<usize>();

    Some(GenreTreeNode {
        genre,
        children,
        books,
        total_books,
    })
}

fn sort_siblings(nodes: &mut [GenreTreeNode<'_>], collator: &dyn Collator) {
    nodes.sort_by(|a, b| collator.compare(a.name(), b.name()));
}

/// Nodes in display order with their depth, roots at depth 0.
pub fn flatten_tree<'t, 'a>(roots: &'t [GenreTreeNode<'a>]) -> Vec<(usize, &'t GenreTreeNode<'a>)> {
    let mut out = Vec::new();
    let mut stack: Vec<(usize, &'t GenreTreeNode<'a>)> = roots.iter().rev().map(|n| (0, n)).collect();
    while let Some((depth, node)) = stack.pop() {
        out.push((depth, node));
        stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
    }
    out
}

/// Render the forest as box-drawing text, one genre per line with its
/// book count.
pub fn format_tree(roots: &[GenreTreeNode<'_>]) -> String {
    let mut output = String::new();
    for root in roots {
        let _ = writeln!(output, "{} ({})", root.name(), root.total_books);
        format_children(root, "", &mut output);
    }
    output
}

fn format_children(node: &GenreTreeNode<'_>, prefix: &str, output: &mut String) {
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let (connector, indent) = if i == last { ("└── ", "    ") } else { ("├── ", "│   ") };
        let _ = writeln!(output, "{prefix}{connector}{} ({})", child.name(), child.total_books);
        format_children(child, &format!("{prefix}{indent}"), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::{BinaryCollator, UnicodeCollator};
    use chrono::{DateTime, Utc};

    fn book(id: &str, genre: &str) -> Book {
        let stamp: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        Book {
            id: id.into(),
            title: id.into(),
            author: "A".into(),
            genre_id: genre.into(),
            description: String::new(),
            tags: Vec::new(),
            chapters: Vec::new(),
            created_at: stamp,
            updated_at: stamp,
            cover_color: "#6c5ce7".into(),
        }
    }

    fn genres() -> Vec<Genre> {
        vec![
            Genre::new("fiction", "Fiction"),
            Genre::new("speculative", "Speculative").with_parent("fiction"),
            Genre::new("nonfiction", "Non-Fiction"),
            Genre::new("design", "Design").with_parent("nonfiction"),
            Genre::new("productivity", "Productivity").with_parent("nonfiction"),
        ]
    }

    #[test]
    fn totals_roll_up() {
        let genres = genres();
        let books = vec![
            book("b1", "speculative"),
            book("b2", "design"),
            book("b3", "productivity"),
            book("b4", "nonfiction"),
        ];
        let tree = build_genre_tree(&genres, &books, &UnicodeCollator);

        let names: Vec<&str> = tree.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["Fiction", "Non-Fiction"]);
        assert_eq!(tree[0].total_books, 1);
        assert!(tree[0].books.is_empty());
        assert_eq!(tree[1].total_books, 3);
        assert_eq!(tree[1].books.len(), 1);
    }

    #[test]
    fn dangling_parent_is_root_and_dangling_book_is_dropped() {
        let genres = vec![Genre::new("orphan", "Orphan").with_parent("gone")];
        let books = vec![book("b1", "orphan"), book("b2", "gone")];
        let tree = build_genre_tree(&genres, &books, &BinaryCollator);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].total_books, 1);
    }

    #[test]
    fn cycles_do_not_recurse() {
        let genres = vec![
            Genre::new("root", "Root"),
            Genre::new("a", "A").with_parent("b"),
            Genre::new("b", "B").with_parent("a"),
        ];
        let tree = build_genre_tree(&genres, &[], &BinaryCollator);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn contains_and_find() {
        let genres = genres();
        let tree = build_genre_tree(&genres, &[], &UnicodeCollator);
        assert!(tree[1].contains("design"));
        assert!(!tree[0].contains("design"));
        assert_eq!(tree[1].find("productivity").map(|n| n.name()), Some("Productivity"));
    }

    #[test]
    fn flatten_is_depth_first_in_display_order() {
        let genres = genres();
        let tree = build_genre_tree(&genres, &[], &UnicodeCollator);
        let flat: Vec<(usize, &str)> = flatten_tree(&tree).into_iter().map(|(d, n)| (d, n.id())).collect();
        assert_eq!(
            flat,
            vec![(0, "fiction"), (1, "speculative"), (0, "nonfiction"), (1, "design"), (1, "productivity")]
        );
    }

    #[test]
    fn format_draws_connectors() {
        let genres = genres();
        let books = vec![book("b1", "design")];
        let text = format_tree(&build_genre_tree(&genres, &books, &UnicodeCollator));
        assert_eq!(
            text,
            "Fiction (0)\n└── Speculative (0)\nNon-Fiction (1)\n├── Design (1)\n└── Productivity (0)\n"
        );
    }
}
