//! Book domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Chapter, GenreId, Section};

/// Opaque book identifier.
pub type BookId = String;

/// A journal entry for one book
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre_id: GenreId,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,

    // Metadata
    pub created_at: DateTime<Utc>, // ISO 8601
    pub updated_at: DateTime<Utc>, // ISO 8601
    pub cover_color: String,       // CSS color
}

impl Book {
    /// All sections across every chapter, in reading order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.chapters.iter().flat_map(|chapter| chapter.sections.iter())
    }

    /// Number of sections across every chapter.
    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.sections.len()).sum()
    }
}
