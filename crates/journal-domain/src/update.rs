//! Payloads for creating and editing books.

use serde::{Deserialize, Serialize};

use super::{Chapter, ContentDraft, GenreId};

/// Everything needed to create a book.
///
/// Ids and timestamps are assigned by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre_id: GenreId,
    pub description: String,
    pub tags: Vec<String>,
    pub content: ContentDraft,
    /// Derived from the palette when absent.
    pub cover_color: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre_id: impl Into<GenreId>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre_id: genre_id.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_content(mut self, content: ContentDraft) -> Self {
        self.content = content;
        self
    }

    pub fn with_cover_color(mut self, color: impl Into<String>) -> Self {
        self.cover_color = Some(color.into());
        self
    }
}

/// A partial edit of a stored book.
///
/// `None` leaves a field untouched. `chapters`, when present, replaces the
/// whole collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre_id: Option<GenreId>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub chapters: Option<Vec<Chapter>>,
    pub cover_color: Option<String>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre_id: impl Into<GenreId>) -> Self {
        self.genre_id = Some(genre_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = Some(chapters);
        self
    }

    pub fn cover_color(mut self, color: impl Into<String>) -> Self {
        self.cover_color = Some(color.into());
        self
    }

    /// True when no field would be replaced.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre_id.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.chapters.is_none()
            && self.cover_color.is_none()
    }
}
