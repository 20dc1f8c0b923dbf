//! Test fixture loading and builders

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use journal_core::{FixedClock, LibraryState, LibraryStore, SequentialIds, StoreEnv};
use journal_domain::{Book, Genre};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a library snapshot fixture
pub fn load_library(name: &str) -> LibraryState {
    let json = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name));
    LibraryState::from_json(&json).unwrap()
}

pub fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Store with predictable ids and a clock starting at 2024-01-01.
pub fn test_store() -> LibraryStore {
    LibraryStore::new(test_env())
}

pub fn test_env() -> StoreEnv {
    StoreEnv::default()
        .with_ids(SequentialIds::new("id"))
        .with_clock(FixedClock::default())
}

pub fn genre(id: &str, name: &str, parent: Option<&str>) -> Genre {
    let genre = Genre::new(id, name);
    match parent {
        Some(parent) => genre.with_parent(parent),
        None => genre,
    }
}

pub fn book(id: &str, genre_id: &str, updated: &str) -> Book {
    Book {
        id: id.into(),
        title: format!("Book {id}"),
        author: "Author".into(),
        genre_id: genre_id.into(),
        description: String::new(),
        tags: Vec::new(),
        chapters: Vec::new(),
        created_at: at(updated),
        updated_at: at(updated),
        cover_color: "#6c5ce7".into(),
    }
}
