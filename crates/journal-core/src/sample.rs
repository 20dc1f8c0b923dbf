//! A small starter library, used when no snapshot is supplied.

use journal_domain::{Book, Chapter, Genre, Section};

use crate::clock::Clock;
use crate::state::LibraryState;

/// Five genres and three books, with the first book selected.
///
/// Every book is stamped with the same `clock.now()` reading.
pub fn sample_library(clock: &dyn Clock) -> LibraryState {
    let genres = vec![
        Genre::new("genre-fiction", "Fiction"),
        Genre::new("genre-speculative", "Speculative").with_parent("genre-fiction"),
        Genre::new("genre-nonfiction", "Non-Fiction"),
        Genre::new("genre-design", "Design").with_parent("genre-nonfiction"),
        Genre::new("genre-productivity", "Productivity").with_parent("genre-nonfiction"),
    ];

    let now = clock.now();
    let books: Vec<Book> = SEED_BOOKS
        .iter()
        .map(|seed| Book {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            genre_id: seed.genre_id.to_string(),
            description: seed.description.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            chapters: vec![Chapter::implicit(
                format!("{}-notes", seed.id),
                seed.sections
                    .iter()
                    .map(|(id, title, summary)| Section::new(*id, *title, *summary))
                    .collect(),
            )],
            created_at: now,
            updated_at: now,
            cover_color: seed.cover_color.to_string(),
        })
        .collect();

    LibraryState {
        selected_genre_id: None,
        selected_book_id: books.first().map(|b| b.id.clone()),
        search_term: String::new(),
        genres,
        books,
    }
}

struct SeedBook {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    genre_id: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    sections: &'static [(&'static str, &'static str, &'static str)],
    cover_color: &'static str,
}

const SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: "book-invisible-archive",
        title: "Invisible Archive",
        author: "Elena Cruz",
        genre_id: "genre-speculative",
        description: "A collection of short stories that explore layered cities and the hidden systems that govern them.",
        tags: &["worldbuilding", "short stories"],
        sections: &[
            (
                "section1",
                "Key Themes",
                "Explores memory, governance, and the tension between physical spaces and digital overlays.",
            ),
            (
                "section2",
                "Memorable Cities",
                "Highlights the City of Echoes and Glacier Port as standout settings with distinct rules.",
            ),
            (
                "section3",
                "Takeaways",
                "Useful for understanding how constraints can create compelling narrative frameworks.",
            ),
        ],
        cover_color: "#6c5ce7",
    },
    SeedBook {
        id: "book-interface-atlas",
        title: "Interface Atlas",
        author: "Monica Zhang",
        genre_id: "genre-design",
        description: "A visual guide to interface patterns that balance aesthetics with long-term maintainability.",
        tags: &["design systems", "ui"],
        sections: &[
            (
                "section4",
                "Pattern Framework",
                "Provides a repeatable framework for documenting patterns, with emphasis on accessibility.",
            ),
            (
                "section5",
                "Case Studies",
                "Breaks down redesigns for productivity apps, showing how to keep complexity approachable.",
            ),
            (
                "section6",
                "Implementation Notes",
                "Offers guidelines for pairing design tokens with component APIs and QA checklists.",
            ),
        ],
        cover_color: "#00cec9",
    },
    SeedBook {
        id: "book-routine-architecture",
        title: "Routine Architecture",
        author: "Haruto Sato",
        genre_id: "genre-productivity",
        description: "Blueprints for designing sustainable habits with modular routines and built-in retrospectives.",
        tags: &["habits", "systems thinking"],
        sections: &[
            (
                "section7",
                "Cycle Planning",
                "Introduces cadence mapping to balance energy, focus, and creative output across a week.",
            ),
            (
                "section8",
                "Retrospective Rituals",
                "Short debrief rituals to capture learnings without creating additional overhead.",
            ),
        ],
        cover_color: "#fdcb6e",
    },
];
