//! Scoped free-text search over books.

use std::collections::HashSet;

use journal_domain::Book;

/// Books in scope that match `term`, most recently updated first.
///
/// The term is trimmed and matched case-insensitively as a substring of
/// the book's [`haystack`]. An empty term keeps every book in scope.
pub fn search_books<'a>(books: &'a [Book], scope: &HashSet<&str>, term: &str) -> Vec<&'a Book> {
    let needle = term.trim().to_lowercase();

    let mut results: Vec<&'a Book> = books
        .iter()
        .filter(|book| scope.contains(book.genre_id.as_str()))
        .filter(|book| needle.is_empty() || haystack(book).contains(&needle))
        .collect();

    // stable, so equal instants keep insertion order
    results.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    results
}

/// Lower-cased searchable text of a book.
///
/// Title, author, description, tags, then every chapter's title and
/// summary followed by its sections' titles and summaries, joined with
/// single spaces. An implicit chapter contributes only its sections.
pub fn haystack(book: &Book) -> String {
    let mut parts = vec![book.title.as_str(), book.author.as_str(), book.description.as_str()];
    parts.extend(book.tags.iter().map(String::as_str));
    for chapter in &book.chapters {
        if !chapter.implicit {
            parts.push(chapter.title.as_str());
            parts.push(chapter.summary.as_str());
        }
        for section in &chapter.sections {
            parts.push(section.title.as_str());
            parts.push(section.summary.as_str());
        }
    }
    parts.join(" ").to_lowercase()
}
